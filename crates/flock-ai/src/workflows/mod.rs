pub mod leadership;
