use super::domain::{LeadershipLevel, Urgency};

/// Skills a ministry's leader needs, keyed by a fragment of the ministry name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinistryNeeds {
    pub keyword: &'static str,
    pub skills: &'static [&'static str],
    pub time_commitment: &'static str,
}

/// Opening offered church-wide, independent of ministry staffing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChurchWidePosition {
    pub position_id: &'static str,
    pub title: &'static str,
    pub ministry_area: &'static str,
    pub urgency: Urgency,
    pub minimum_score: f64,
    pub match_factor: f64,
    pub required_skills: &'static [&'static str],
    pub time_commitment: &'static str,
    pub leadership_level: LeadershipLevel,
    pub reasoning: &'static [&'static str],
}

/// Immutable keyword tables consulted by the scorer and the opportunity matcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadershipCatalog {
    pub leadership_gifts: &'static [&'static str],
    pub executive_occupations: &'static [&'static str],
    pub ministry_needs: &'static [MinistryNeeds],
    pub default_needs: MinistryNeeds,
    pub church_wide_positions: &'static [ChurchWidePosition],
}

const LEADERSHIP_GIFTS: &[&str] = &[
    "liderazgo",
    "administración",
    "enseñanza",
    "pastoreo",
    "discernimiento",
];

const EXECUTIVE_OCCUPATIONS: &[&str] = &["gerente", "director", "coordinador"];

const MINISTRY_NEEDS: &[MinistryNeeds] = &[
    MinistryNeeds {
        keyword: "música",
        skills: &["liderazgo", "música", "administración", "creatividad"],
        time_commitment: "6-10 horas/semana",
    },
    MinistryNeeds {
        keyword: "enseñanza",
        skills: &["enseñanza", "liderazgo", "pastoreo", "comunicación"],
        time_commitment: "5-8 horas/semana",
    },
    MinistryNeeds {
        keyword: "niños",
        skills: &["liderazgo", "enseñanza", "paciencia", "organización"],
        time_commitment: "4-8 horas/semana",
    },
    MinistryNeeds {
        keyword: "jóvenes",
        skills: &["liderazgo", "mentoría", "comunicación", "discernimiento"],
        time_commitment: "6-12 horas/semana",
    },
    MinistryNeeds {
        keyword: "administración",
        skills: &["administración", "liderazgo", "organización", "planificación"],
        time_commitment: "8-15 horas/semana",
    },
];

const DEFAULT_NEEDS: MinistryNeeds = MinistryNeeds {
    keyword: "default",
    skills: &["liderazgo", "administración", "comunicación"],
    time_commitment: "4-6 horas/semana",
};

const CHURCH_WIDE_POSITIONS: &[ChurchWidePosition] = &[
    ChurchWidePosition {
        position_id: "assistant-pastor",
        title: "Pastor Asistente",
        ministry_area: "Liderazgo General",
        urgency: Urgency::Medium,
        minimum_score: 80.0,
        match_factor: 1.0,
        required_skills: &["liderazgo", "pastoreo", "enseñanza", "administración"],
        time_commitment: "10-15 horas/semana",
        leadership_level: LeadershipLevel::Senior,
        reasoning: &["Alto potencial de liderazgo", "Preparado para roles ejecutivos"],
    },
    ChurchWidePosition {
        position_id: "ministry-coordinator",
        title: "Coordinador de Ministerios",
        ministry_area: "Coordinación",
        urgency: Urgency::Low,
        minimum_score: 70.0,
        match_factor: 0.9,
        required_skills: &["administración", "liderazgo", "organización"],
        time_commitment: "5-8 horas/semana",
        leadership_level: LeadershipLevel::Mid,
        reasoning: &["Capacidad organizacional", "Experiencia en múltiples áreas"],
    },
];

impl LeadershipCatalog {
    pub const fn standard() -> Self {
        Self {
            leadership_gifts: LEADERSHIP_GIFTS,
            executive_occupations: EXECUTIVE_OCCUPATIONS,
            ministry_needs: MINISTRY_NEEDS,
            default_needs: DEFAULT_NEEDS,
            church_wide_positions: CHURCH_WIDE_POSITIONS,
        }
    }

    /// First table entry whose keyword appears in the lowercased ministry name.
    pub fn needs_for(&self, ministry_name: &str) -> &MinistryNeeds {
        let lower = ministry_name.to_lowercase();
        self.ministry_needs
            .iter()
            .find(|needs| lower.contains(needs.keyword))
            .unwrap_or(&self.default_needs)
    }
}

impl Default for LeadershipCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
