// Fixed semantic anchors — the category set and the value poles.
//
// These are static configuration, not learned artifacts. The classifier
// embeds each anchor text once at construction; the resulting vectors are
// read-only for the process lifetime.

use serde::{Deserialize, Serialize};

/// The eight meeting categories the classifier can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeetingCategory {
    QuarterlyBusinessReview,
    ProductLaunch,
    ConferencePreparation,
    ExecutivePresentation,
    BudgetPlanning,
    ProjectKickoff,
    HiringCommittee,
    TrainingWorkshop,
}

impl MeetingCategory {
    /// All categories in their fixed iteration order. Classification ties
    /// break toward the earliest entry, so this order is part of the
    /// contract.
    pub const ALL: [MeetingCategory; 8] = [
        MeetingCategory::QuarterlyBusinessReview,
        MeetingCategory::ProductLaunch,
        MeetingCategory::ConferencePreparation,
        MeetingCategory::ExecutivePresentation,
        MeetingCategory::BudgetPlanning,
        MeetingCategory::ProjectKickoff,
        MeetingCategory::HiringCommittee,
        MeetingCategory::TrainingWorkshop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingCategory::QuarterlyBusinessReview => "Quarterly Business Review (QBR)",
            MeetingCategory::ProductLaunch => "Product Launch",
            MeetingCategory::ConferencePreparation => "Conference/Event Preparation",
            MeetingCategory::ExecutivePresentation => "Executive Presentation",
            MeetingCategory::BudgetPlanning => "Budget Planning",
            MeetingCategory::ProjectKickoff => "Project Kickoff",
            MeetingCategory::HiringCommittee => "Hiring Committee",
            MeetingCategory::TrainingWorkshop => "Training Workshop",
        }
    }

    /// One-sentence description that, combined with the name, forms this
    /// category's anchor text.
    fn description(&self) -> &'static str {
        match self {
            MeetingCategory::QuarterlyBusinessReview => {
                "Strategic business review meeting covering quarterly performance, metrics, and goals"
            }
            MeetingCategory::ProductLaunch => {
                "Meeting focused on launching new products or features to market"
            }
            MeetingCategory::ConferencePreparation => {
                "Planning and coordination meeting for conferences, summits, or large events"
            }
            MeetingCategory::ExecutivePresentation => {
                "High-stakes presentation to executive leadership or board"
            }
            MeetingCategory::BudgetPlanning => {
                "Financial planning and budget allocation meeting"
            }
            MeetingCategory::ProjectKickoff => {
                "Initial meeting to start a new project with team alignment"
            }
            MeetingCategory::HiringCommittee => {
                "Meeting to review candidates and make hiring decisions"
            }
            MeetingCategory::TrainingWorkshop => {
                "Educational session for skill development and knowledge sharing"
            }
        }
    }

    /// The text embedded as this category's anchor.
    pub fn anchor_text(&self) -> String {
        format!("{}: {}", self.as_str(), self.description())
    }
}

impl std::fmt::Display for MeetingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Semantic anchor for the high-value pole.
pub const HIGH_VALUE_ANCHOR: &str = "High strategic impact, executive presentation, critical \
decision making, large scale coordination, crisis management, board meeting, product launch, \
pillar review, fiscal year kickoff, strategy roadmap, business review, okr planning";

/// Semantic anchor for the low-value pole.
pub const LOW_VALUE_ANCHOR: &str = "Routine status check, casual sync, social event, \
administrative task, 1:1 catch up, weekly sync, team happy hour, training workshop, boot camp, \
open day, showcase, learning session";

/// Affine recalibration fitted offline against a reference scoring
/// distribution. Configuration, not a runtime-derived artifact.
pub const CALIBRATION_SLOPE: f64 = 2.0089;
pub const CALIBRATION_INTERCEPT: f64 = -79.3864;
