use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::classifier::{COMMUNICATION_GAP, EXPERIENCE_GAP};
use super::domain::{add_months, LeadershipPotential};

pub const ASSESSMENT_ID: &str = "leadership-assessment";
pub const FOUNDATIONAL_TRAINING_ID: &str = "foundational-training";
pub const MENTORING_SETUP_ID: &str = "mentoring-setup";
pub const COMMUNICATION_ID: &str = "communication-development";
pub const PRACTICAL_EXPERIENCE_ID: &str = "practical-experience";
pub const ADVANCED_LEADERSHIP_ID: &str = "advanced-leadership";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MilestoneCategory {
    Spiritual,
    Skills,
    Experience,
    Mentoring,
    Training,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MilestonePriority {
    High,
    Medium,
    Low,
}

/// Progress is tracked elsewhere; generated plans always start at `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MilestoneStatus {
    NotStarted,
    InProgress,
    Completed,
    Deferred,
}

impl MilestoneStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Deferred => "Deferred",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Book,
    Course,
    Workshop,
    Mentor,
    Experience,
    Conference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopmentResource {
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopmentMilestone {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: MilestoneCategory,
    pub priority: MilestonePriority,
    pub estimated_duration: String,
    pub prerequisites: Vec<String>,
    pub resources: Vec<DevelopmentResource>,
    pub measurable_outcomes: Vec<String>,
    pub target_completion_date: NaiveDate,
    pub status: MilestoneStatus,
}

#[derive(Debug, Clone, Copy)]
struct ResourceTemplate {
    title: &'static str,
    resource_type: ResourceType,
    provider: Option<&'static str>,
    duration: &'static str,
}

#[derive(Debug, Clone, Copy)]
struct MilestoneTemplate {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: MilestoneCategory,
    priority: MilestonePriority,
    estimated_duration: &'static str,
    target_months: u32,
    resources: &'static [ResourceTemplate],
    outcomes: &'static [&'static str],
}

impl MilestoneTemplate {
    fn instantiate(&self, prerequisites: &[&str], today: NaiveDate) -> DevelopmentMilestone {
        DevelopmentMilestone {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            category: self.category,
            priority: self.priority,
            estimated_duration: self.estimated_duration.to_string(),
            prerequisites: prerequisites.iter().map(|id| id.to_string()).collect(),
            resources: self
                .resources
                .iter()
                .map(|resource| DevelopmentResource {
                    title: resource.title.to_string(),
                    resource_type: resource.resource_type,
                    provider: resource.provider.map(str::to_string),
                    cost: None,
                    duration: Some(resource.duration.to_string()),
                    url: None,
                })
                .collect(),
            measurable_outcomes: self.outcomes.iter().map(|o| o.to_string()).collect(),
            target_completion_date: add_months(today, self.target_months),
            status: MilestoneStatus::NotStarted,
        }
    }
}

const ASSESSMENT: MilestoneTemplate = MilestoneTemplate {
    id: ASSESSMENT_ID,
    title: "Evaluación Integral de Liderazgo",
    description: "Evaluación completa de fortalezas y áreas de desarrollo en liderazgo",
    category: MilestoneCategory::Skills,
    priority: MilestonePriority::High,
    estimated_duration: "2-3 semanas",
    target_months: 1,
    resources: &[
        ResourceTemplate {
            title: "Evaluación 360 de Liderazgo",
            resource_type: ResourceType::Course,
            provider: None,
            duration: "1 semana",
        },
        ResourceTemplate {
            title: "Assessment de Dones Espirituales Avanzado",
            resource_type: ResourceType::Course,
            provider: None,
            duration: "3 días",
        },
    ],
    outcomes: &[
        "Completar evaluación 360",
        "Identificar top 3 fortalezas",
        "Definir 3 áreas de desarrollo prioritarias",
    ],
};

const FOUNDATIONAL_TRAINING: MilestoneTemplate = MilestoneTemplate {
    id: FOUNDATIONAL_TRAINING_ID,
    title: "Capacitación Foundacional de Liderazgo",
    description: "Curso base de principios de liderazgo cristiano",
    category: MilestoneCategory::Training,
    priority: MilestonePriority::High,
    estimated_duration: "6-8 semanas",
    target_months: 3,
    resources: &[
        ResourceTemplate {
            title: "Curso: Fundamentos de Liderazgo Cristiano",
            resource_type: ResourceType::Course,
            provider: Some("Iglesia Local"),
            duration: "8 semanas",
        },
        ResourceTemplate {
            title: "Libro: El Líder que Todos Querríamos Tener",
            resource_type: ResourceType::Book,
            provider: None,
            duration: "1 mes",
        },
    ],
    outcomes: &[
        "Completar curso con 90%+ asistencia",
        "Aprobar evaluación final",
        "Aplicar 3 principios en rol actual",
    ],
};

// Due one month before foundational training even though it is listed after it.
const MENTORING_SETUP: MilestoneTemplate = MilestoneTemplate {
    id: MENTORING_SETUP_ID,
    title: "Establecimiento de Mentoría",
    description: "Asignación y inicio de relación de mentoría con líder experimentado",
    category: MilestoneCategory::Mentoring,
    priority: MilestonePriority::High,
    estimated_duration: "6-12 meses",
    target_months: 2,
    resources: &[
        ResourceTemplate {
            title: "Guía de Mentoría en Liderazgo",
            resource_type: ResourceType::Course,
            provider: None,
            duration: "2 semanas",
        },
        ResourceTemplate {
            title: "Plan de Reuniones Mensuales",
            resource_type: ResourceType::Course,
            provider: None,
            duration: "Ongoing",
        },
    ],
    outcomes: &[
        "Asignación de mentor calificado",
        "Reuniones mensuales consistentes",
        "Plan de desarrollo personalizado",
    ],
};

const COMMUNICATION: MilestoneTemplate = MilestoneTemplate {
    id: COMMUNICATION_ID,
    title: "Desarrollo de Habilidades de Comunicación",
    description: "Mejora en comunicación pública y habilidades de influencia",
    category: MilestoneCategory::Skills,
    priority: MilestonePriority::Medium,
    estimated_duration: "3-4 meses",
    target_months: 6,
    resources: &[
        ResourceTemplate {
            title: "Curso de Oratoria",
            resource_type: ResourceType::Course,
            provider: None,
            duration: "6 semanas",
        },
        ResourceTemplate {
            title: "Toastmasters International",
            resource_type: ResourceType::Experience,
            provider: None,
            duration: "6 meses",
        },
    ],
    outcomes: &[
        "Completar 5 presentaciones públicas",
        "Mejorar rating de comunicación en 25%",
        "Liderar al menos 2 reuniones ministeriales",
    ],
};

const PRACTICAL_EXPERIENCE: MilestoneTemplate = MilestoneTemplate {
    id: PRACTICAL_EXPERIENCE_ID,
    title: "Experiencia de Liderazgo Supervisada",
    description: "Oportunidades prácticas de liderazgo con supervisión y retroalimentación",
    category: MilestoneCategory::Experience,
    priority: MilestonePriority::High,
    estimated_duration: "4-6 meses",
    target_months: 8,
    resources: &[
        ResourceTemplate {
            title: "Asignación de Proyecto de Liderazgo",
            resource_type: ResourceType::Experience,
            provider: None,
            duration: "3-4 meses",
        },
        ResourceTemplate {
            title: "Supervisión Semanal",
            resource_type: ResourceType::Mentor,
            provider: None,
            duration: "Ongoing",
        },
    ],
    outcomes: &[
        "Liderar proyecto ministerial exitosamente",
        "Supervisar equipo de 3-5 personas",
        "Recibir evaluación positiva (4/5 o superior)",
    ],
};

const ADVANCED_LEADERSHIP: MilestoneTemplate = MilestoneTemplate {
    id: ADVANCED_LEADERSHIP_ID,
    title: "Capacitación Avanzada de Liderazgo",
    description: "Desarrollo de habilidades de liderazgo senior y visión estratégica",
    category: MilestoneCategory::Training,
    priority: MilestonePriority::Medium,
    estimated_duration: "6-8 meses",
    target_months: 12,
    resources: &[
        ResourceTemplate {
            title: "Seminario de Liderazgo Estratégico",
            resource_type: ResourceType::Conference,
            provider: None,
            duration: "3 días",
        },
        ResourceTemplate {
            title: "Coaching Ejecutivo",
            resource_type: ResourceType::Mentor,
            provider: None,
            duration: "6 meses",
        },
    ],
    outcomes: &[
        "Desarrollar plan estratégico para área ministerial",
        "Implementar iniciativa de mejora",
        "Prepararse para roles de liderazgo senior",
    ],
};

/// Assembles a dated development plan from the classifier's gaps and tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevelopmentPlanner;

impl DevelopmentPlanner {
    pub fn build_path(
        &self,
        potential: LeadershipPotential,
        development_areas: &[String],
        today: NaiveDate,
    ) -> Vec<DevelopmentMilestone> {
        let has_gap = |gap: &str| development_areas.iter().any(|area| area == gap);

        let mut milestones = vec![
            ASSESSMENT.instantiate(&[], today),
            FOUNDATIONAL_TRAINING.instantiate(&[ASSESSMENT_ID], today),
            MENTORING_SETUP.instantiate(&[ASSESSMENT_ID], today),
        ];

        if has_gap(COMMUNICATION_GAP) {
            milestones.push(COMMUNICATION.instantiate(&[FOUNDATIONAL_TRAINING_ID], today));
        }

        let needs_experience = has_gap(EXPERIENCE_GAP);
        if needs_experience {
            milestones.push(PRACTICAL_EXPERIENCE.instantiate(&[MENTORING_SETUP_ID], today));
        }

        if potential == LeadershipPotential::High {
            let prerequisites: &[&str] = if needs_experience {
                &[PRACTICAL_EXPERIENCE_ID]
            } else {
                &[]
            };
            milestones.push(ADVANCED_LEADERSHIP.instantiate(prerequisites, today));
        }

        milestones
    }
}
