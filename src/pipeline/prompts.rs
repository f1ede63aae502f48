// Prompt assembly — fixed template and scenario tables, date formatting,
// and the final numbered entry list.
//
// The template table (8 categories + a generic fallback) and the synthetic
// scenario table (5 entries) are static configuration. Prompt generation is
// plain placeholder substitution; a malformed or missing start timestamp
// degrades to placeholder text and never aborts the run.

use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;

use crate::output::truncate_chars;
use crate::pipeline::score::{ScoredMeeting, UserRole};
use crate::pipeline::select::Selection;
use crate::scoring::anchors::MeetingCategory;

/// Sentinel score assigned to every synthetic scenario.
pub const SYNTHETIC_SCORE: f64 = 95.0;
/// Fixed reasoning text for synthetic scenarios.
pub const SYNTHETIC_REASONING: &str = "Synthetic High-Value Scenario";

/// Complexity tier of a meeting type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}

/// Per-category preparation metadata and prompt template.
pub struct MeetingTemplate {
    /// Display category shown in the report (broader than the classifier
    /// category, e.g. "Strategic Planning").
    pub display_category: &'static str,
    pub complexity: Complexity,
    pub lead_time_days: u32,
    pub expected_tools: &'static [&'static str],
    /// Category-specific prompt text; None falls back to the generic
    /// template.
    pub prompt_template: Option<&'static str>,
}

/// Look up the template for a classified category. Total over the enum;
/// the generic fallback only applies to templates without specific prompt
/// text.
pub fn template_for(category: MeetingCategory) -> &'static MeetingTemplate {
    match category {
        MeetingCategory::QuarterlyBusinessReview => &QBR_TEMPLATE,
        MeetingCategory::ProductLaunch => &PRODUCT_LAUNCH_TEMPLATE,
        MeetingCategory::ConferencePreparation => &CONFERENCE_TEMPLATE,
        MeetingCategory::ExecutivePresentation => &EXEC_PRESENTATION_TEMPLATE,
        MeetingCategory::BudgetPlanning => &BUDGET_TEMPLATE,
        MeetingCategory::ProjectKickoff => &KICKOFF_TEMPLATE,
        MeetingCategory::HiringCommittee => &HIRING_TEMPLATE,
        MeetingCategory::TrainingWorkshop => &TRAINING_TEMPLATE,
    }
}

static QBR_TEMPLATE: MeetingTemplate = MeetingTemplate {
    display_category: "Strategic Planning",
    complexity: Complexity::High,
    lead_time_days: 45,
    expected_tools: &[
        "graph_calendar_get_events",
        "graph_get_people",
        "graph_get_manager",
    ],
    prompt_template: Some(
        r#"I have an upcoming Quarterly Business Review titled "{subject}" scheduled for {datetime} with {attendees} attendees.

Please find and access this specific event on my calendar (search for: "{subject}" on {date} at {time}) to get the complete details including:
- Full attendee list with names and emails
- Meeting location: {location}
- Meeting description and agenda
- Any attached documents or related materials

Then create a detailed workback plan that includes:
1. All key milestones leading up to the meeting
2. Specific tasks with owners assigned from the actual attendee list
3. Dependencies between tasks
4. Critical path activities
5. Risk mitigation strategies

Please consider:
- Use the actual attendee names from this calendar event for task assignments
- Reference the meeting location for any venue/setup tasks
- Check for related emails, documents, or previous meeting notes
- Coordinate across teams based on attendee organizational roles

Generate a comprehensive workback plan that ensures successful meeting preparation."#,
    ),
};

static PRODUCT_LAUNCH_TEMPLATE: MeetingTemplate = MeetingTemplate {
    display_category: "Product Management",
    complexity: Complexity::High,
    lead_time_days: 90,
    expected_tools: &[
        "graph_calendar_get_events",
        "graph_get_people",
        "graph_get_document",
    ],
    prompt_template: Some(
        r#"I have an upcoming product launch event titled "{subject}" scheduled for {datetime} with {attendees} attendees.

Please find and access this specific event on my calendar (search for: "{subject}" on {date} at {time}) to retrieve:
- Complete attendee list with names, emails, and roles
- Meeting location: {location}
- Event description and launch details
- Any linked documents, presentations, or launch materials

Then create a detailed workback plan that includes:
1. All key milestones leading up to the launch
2. Specific tasks with owners from the actual attendee list
3. Dependencies between tasks
4. Critical path activities
5. Risk mitigation strategies

Please consider:
- Identify product, marketing, and support team members from the attendee list
- Reference the launch scope and timeline from the meeting description
- Check for related product roadmap documents or specifications
- Coordinate cross-functional teams based on attendee roles

Generate a comprehensive workback plan that ensures a successful product launch."#,
    ),
};

static CONFERENCE_TEMPLATE: MeetingTemplate = MeetingTemplate {
    display_category: "Events & Communications",
    complexity: Complexity::Medium,
    lead_time_days: 45,
    expected_tools: &[
        "graph_calendar_get_events",
        "graph_get_people",
        "graph_send_mail",
    ],
    prompt_template: Some(
        r#"I have an upcoming conference event titled "{subject}" scheduled for {datetime} with {attendees} attendees.

Please find and access this specific calendar event (search for: "{subject}" on {date} at {time}) to retrieve:
- Full attendee list identifying speakers, organizers, VIPs, and participants
- Event venue and location details: {location}
- Conference description, themes, and session topics
- Any planning documents or speaker materials

Then create a detailed workback plan that includes:
1. All key milestones leading up to the conference
2. Specific tasks with owners from the attendee/organizer list
3. Dependencies between tasks
4. Critical path activities
5. Risk mitigation strategies

Please consider:
- Identify speakers, session chairs, and the organizing committee from the attendee list
- Use the venue location for logistics planning (AV, catering, setup)
- Assign speaker coordination tasks to actual organizer names

Generate a comprehensive workback plan that ensures successful conference execution."#,
    ),
};

static EXEC_PRESENTATION_TEMPLATE: MeetingTemplate = MeetingTemplate {
    display_category: "Leadership Communications",
    complexity: Complexity::Medium,
    lead_time_days: 21,
    expected_tools: &[
        "graph_calendar_get_events",
        "graph_get_document",
        "bizchat_search",
    ],
    prompt_template: Some(
        r#"I have an upcoming executive presentation titled "{subject}" scheduled for {datetime}.

Please find and access this specific calendar event (search for: "{subject}" on {date} at {time}) to retrieve:
- Complete list of executive attendees with names and titles
- Presentation venue: {location}
- Meeting description and presentation topics
- Any pre-shared materials or agenda documents

Then create a detailed workback plan that includes:
1. All key milestones leading up to the presentation
2. Specific tasks with owners identified from the attendee list
3. Dependencies between tasks (data collection, slide creation, reviews)
4. Critical path activities
5. Risk mitigation strategies

Please consider:
- Identify the executive audience from the attendee list (VPs, SVPs, C-level)
- Assign slide creation and review tasks to actual people on the invite
- Check for related strategic documents or previous presentations
- Plan rehearsals with the actual presenters from the attendee list

Generate a comprehensive workback plan that ensures a successful executive presentation."#,
    ),
};

static BUDGET_TEMPLATE: MeetingTemplate = MeetingTemplate {
    display_category: "Financial Planning",
    complexity: Complexity::Medium,
    lead_time_days: 30,
    expected_tools: &["graph_calendar_get_events", "graph_get_document"],
    prompt_template: Some(
        r#"I have an upcoming budget planning meeting titled "{subject}" scheduled for {datetime} with {attendees} stakeholders.

Please find and access this specific calendar event (search for: "{subject}" on {date} at {time}) to retrieve:
- Complete attendee list with budget owners, finance team, and approvers
- Meeting location: {location}
- Budget planning scope and fiscal period from the meeting description
- Any linked budget templates or financial documents

Then create a detailed workback plan that includes:
1. All key milestones leading up to the budget approval
2. Specific tasks with owners identified from the attendee list
3. Dependencies between tasks (data collection, analysis, reviews, approvals)
4. Critical path activities
5. Risk mitigation strategies

Please consider:
- Budget data needs to be collected from multiple departments
- Multiple review and approval cycles with finance and leadership
- Budget justifications and business cases need to be prepared
- Historical data analysis and forecasting are needed

Generate a comprehensive workback plan that ensures successful budget planning and approval."#,
    ),
};

static KICKOFF_TEMPLATE: MeetingTemplate = MeetingTemplate {
    display_category: "Project Management",
    complexity: Complexity::Medium,
    lead_time_days: 14,
    expected_tools: &[
        "graph_calendar_get_events",
        "graph_get_people",
        "ado_get_work_items",
    ],
    prompt_template: Some(
        r#"I have an upcoming project kickoff meeting titled "{subject}" scheduled for {datetime} with {attendees} team members.

Please find and access this specific calendar event (search for: "{subject}" on {date} at {time}) to retrieve:
- Complete attendee list with project team members and stakeholders
- Meeting location: {location}
- Project scope, goals, and deliverables from the meeting description
- Any attached project charters or planning documents

Then create a detailed workback plan that includes:
1. All key milestones for the project execution
2. Specific tasks with owners assigned from the actual attendee list
3. Dependencies between tasks
4. Critical path activities
5. Risk mitigation strategies

Please consider:
- Identify the project manager, core team, and stakeholders from the attendee list
- Reference the project goals from the meeting description
- Coordinate cross-functional dependencies based on attendee roles

Generate a comprehensive workback plan that ensures a successful project kickoff and execution."#,
    ),
};

static HIRING_TEMPLATE: MeetingTemplate = MeetingTemplate {
    display_category: "Talent Acquisition",
    complexity: Complexity::Low,
    lead_time_days: 7,
    expected_tools: &[
        "graph_calendar_get_events",
        "graph_get_people",
        "graph_send_mail",
    ],
    prompt_template: Some(
        r#"I have an upcoming hiring committee meeting titled "{subject}" scheduled for {datetime} with {attendees} interviewers.

Please find and access this specific calendar event (search for: "{subject}" on {date} at {time}) to retrieve:
- Complete list of interviewers and hiring managers
- Meeting location: {location}
- Candidate details and role information from the meeting description
- Any attached resumes or interview feedback forms

Then create a detailed workback plan that includes:
1. All key milestones for the hiring decision process
2. Specific tasks with owners assigned from the attendee list (feedback collection, debrief)
3. Dependencies between tasks
4. Critical path activities (offer generation, background checks)
5. Risk mitigation strategies

Please consider:
- Identify the hiring manager and interview panel from the attendee list
- Assign feedback submission tasks to actual interviewers
- Coordinate with HR and the hiring manager based on attendee roles

Generate a comprehensive workback plan that ensures a smooth hiring decision process."#,
    ),
};

static TRAINING_TEMPLATE: MeetingTemplate = MeetingTemplate {
    display_category: "Learning & Development",
    complexity: Complexity::Medium,
    lead_time_days: 60,
    expected_tools: &[
        "graph_calendar_get_events",
        "graph_get_people",
        "graph_send_mail",
    ],
    prompt_template: Some(
        r#"I have an upcoming training workshop titled "{subject}" scheduled for {datetime} with {attendees} participants.

Please find and access this specific calendar event (search for: "{subject}" on {date} at {time}) to retrieve:
- Complete list of participants and trainers
- Workshop venue: {location}
- Training agenda and learning objectives from the meeting description
- Any attached training materials or pre-read documents

Then create a detailed workback plan that includes:
1. All key milestones for the workshop preparation and delivery
2. Specific tasks with owners assigned from the organizer/trainer list
3. Dependencies between tasks (content creation, logistics, registration)
4. Critical path activities
5. Risk mitigation strategies

Please consider:
- Identify the trainers and logistics coordinators from the attendee list
- Use the venue location for setup and catering planning
- Assign content preparation tasks to actual trainers
- Plan participant communication and registration tracking

Generate a comprehensive workback plan that ensures a successful training workshop."#,
    ),
};

/// Generic fallback for templates without specific prompt text.
const GENERIC_PROMPT_TEMPLATE: &str = r#"I have an upcoming meeting titled "{subject}" scheduled for {datetime} with {attendees} attendees.

Please find and access this specific event on my calendar (search for: "{subject}" on {date} at {time}) to get the complete details including:
- Full attendee list with names and emails
- Meeting location: {location}
- Meeting description and agenda
- Any attached documents or related materials

Then create a detailed workback plan that includes:
1. All key milestones leading up to the meeting
2. Specific tasks with owners assigned from the actual attendee list
3. Dependencies between tasks
4. Critical path activities
5. Risk mitigation strategies

Generate a comprehensive workback plan that ensures successful meeting preparation."#;

/// A hypothetical high-value scenario, always included in the package.
pub struct SyntheticScenario {
    pub title: &'static str,
    pub display_category: &'static str,
    pub complexity: Complexity,
    pub lead_time_days: u32,
    pub description: &'static str,
    pub attendees: usize,
    pub user_role: UserRole,
    pub expected_tools: &'static [&'static str],
    pub scenario: &'static str,
}

pub const SYNTHETIC_SCENARIOS: [SyntheticScenario; 5] = [
    SyntheticScenario {
        title: "Board of Directors Quarterly Strategy Review",
        display_category: "Strategic Planning",
        complexity: Complexity::High,
        lead_time_days: 60,
        description: "Present Q4 performance, annual strategy, and FY26 roadmap to the Board of Directors",
        attendees: 15,
        user_role: UserRole::Organizer,
        expected_tools: &[
            "graph_calendar_get_events",
            "graph_get_people",
            "graph_get_document",
            "bizchat_search",
        ],
        scenario: "You are presenting to the Board of Directors covering quarterly results, strategic initiatives, competitive landscape, and next year's investment priorities. This is a high-stakes presentation requiring extensive preparation, data analysis, and stakeholder alignment.",
    },
    SyntheticScenario {
        title: "Major Customer Executive Business Review (Fortune 100)",
        display_category: "Strategic Planning",
        complexity: Complexity::High,
        lead_time_days: 45,
        description: "Executive business review with a Fortune 100 customer covering partnership value, roadmap, and expansion opportunities",
        attendees: 20,
        user_role: UserRole::Organizer,
        expected_tools: &[
            "graph_calendar_get_events",
            "graph_get_people",
            "graph_get_document",
            "bizchat_search",
        ],
        scenario: "Conduct a strategic business review with your largest enterprise customer's C-suite. You need to demonstrate value delivered, address concerns, showcase future capabilities, and identify expansion opportunities worth millions in annual recurring revenue.",
    },
    SyntheticScenario {
        title: "Annual Product Strategy Offsite with CVP",
        display_category: "Product Management",
        complexity: Complexity::High,
        lead_time_days: 90,
        description: "3-day offsite to define product vision, strategy, and OKRs for the next fiscal year",
        attendees: 30,
        user_role: UserRole::Organizer,
        expected_tools: &[
            "graph_calendar_get_events",
            "graph_get_people",
            "graph_get_document",
            "ado_get_work_items",
        ],
        scenario: "Lead a 3-day offsite with product leadership and engineering directors to define the annual product strategy, prioritize investments across multiple product lines, set ambitious OKRs, and align on execution plans with CVP approval.",
    },
    SyntheticScenario {
        title: "Crisis Management: Major Service Outage Communication",
        display_category: "Leadership Communications",
        complexity: Complexity::High,
        lead_time_days: 7,
        description: "Coordinate crisis response and executive communications for a major service outage affecting millions of users",
        attendees: 25,
        user_role: UserRole::Organizer,
        expected_tools: &[
            "graph_calendar_get_events",
            "graph_get_people",
            "graph_send_mail",
            "bizchat_search",
        ],
        scenario: "A critical service outage has impacted millions of customers. You need to coordinate incident response, prepare executive communications, manage customer notifications, and organize war room logistics. Time is critical and stakes are high.",
    },
    SyntheticScenario {
        title: "Company-Wide Product Training Launch (M365 Pulse)",
        display_category: "Learning & Development",
        complexity: Complexity::High,
        lead_time_days: 45,
        description: "Launch enterprise-wide training program on new M365 Pulse features for 374+ participants across global offices",
        attendees: 374,
        user_role: UserRole::Participant,
        expected_tools: &[
            "graph_calendar_get_events",
            "graph_get_people",
            "graph_send_mail",
            "graph_get_document",
        ],
        scenario: "Participate in planning the launch of a comprehensive training program introducing M365 Pulse to the entire organization. With 374 participants across multiple time zones, this requires coordinating trainers, preparing materials, setting up virtual infrastructure, and ensuring maximum adoption.",
    },
];

/// One fully assembled record in the annotation package. Serializes with
/// the camelCase field names the annotation page expects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptEntry {
    pub id: usize,
    pub title: String,
    pub category: String,
    pub complexity: Complexity,
    pub lead_time: u32,
    pub description: String,
    pub attendees: usize,
    pub user_role: UserRole,
    pub value_score: f64,
    pub reasoning: String,
    pub auto_selected: bool,
    pub is_synthetic: bool,
    pub prompt: String,
    pub expected_tools: Vec<String>,
    pub status: String,
    pub selected: bool,
    pub meeting_date: String,
    pub location: String,
    pub organizer: String,
}

/// Start timestamp formatted three ways for template substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDate {
    pub date: String,
    pub time: String,
    pub datetime: String,
    /// Whether the raw timestamp actually parsed.
    pub parsed: bool,
}

/// Parse an ISO-8601-ish timestamp, tolerating fractional seconds, a
/// trailing Z, explicit offsets, or no timezone at all. Returns the
/// wall-clock time.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    let trimmed = raw.trim_end_matches('Z');
    let trimmed = trimmed.split('.').next().unwrap_or(trimmed);
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Format a meeting's start for prompts and display. Malformed or missing
/// timestamps yield placeholder text, never an error.
pub fn format_event_start(raw: Option<&str>) -> FormattedDate {
    match raw.and_then(parse_timestamp) {
        Some(dt) => FormattedDate {
            date: dt.format("%B %d, %Y").to_string(),
            time: dt.format("%I:%M %p").to_string(),
            datetime: dt.format("%B %d, %Y at %I:%M %p").to_string(),
            parsed: true,
        },
        None => FormattedDate {
            date: "the scheduled date".to_string(),
            time: String::new(),
            datetime: "the scheduled date and time".to_string(),
            parsed: false,
        },
    }
}

fn fill_template(
    template: &str,
    subject: &str,
    dates: &FormattedDate,
    attendees: usize,
    location: &str,
) -> String {
    template
        .replace("{subject}", subject)
        .replace("{datetime}", &dates.datetime)
        .replace("{date}", &dates.date)
        .replace("{time}", &dates.time)
        .replace("{attendees}", &attendees.to_string())
        .replace("{location}", location)
}

/// Build the prompt for a real meeting from its category template (or the
/// generic fallback).
pub fn meeting_prompt(meeting: &ScoredMeeting) -> String {
    let template = template_for(meeting.category);
    let dates = format_event_start(meeting.event.start_date_time());
    let location = meeting
        .event
        .location_name()
        .unwrap_or("the scheduled location");

    fill_template(
        template.prompt_template.unwrap_or(GENERIC_PROMPT_TEMPLATE),
        meeting.event.subject_or_untitled(),
        &dates,
        meeting.event.attendee_count(),
        location,
    )
}

fn synthetic_prompt(scenario: &SyntheticScenario) -> String {
    let (role_context, role_tasks) = match scenario.user_role {
        UserRole::Organizer => (
            "As the organizer and leader of this high-stakes meeting, you are responsible for its success and strategic outcomes.",
            "- Define meeting objectives and desired outcomes\n\
             - Identify and invite key stakeholders and decision makers\n\
             - Prepare comprehensive presentation materials and data analysis\n\
             - Coordinate pre-reads and background materials\n\
             - Plan for contingencies and difficult questions\n\
             - Arrange logistics (venue, technology, catering for multi-day events)\n\
             - Schedule preparation sessions with your team\n\
             - Create detailed agenda with time allocations",
        ),
        UserRole::Participant => (
            "As a key participant in this strategic meeting, you need to be thoroughly prepared to contribute effectively.",
            "- Review all meeting materials and background documents\n\
             - Prepare your perspective and recommendations\n\
             - Identify questions and concerns to raise\n\
             - Coordinate with your team on a unified position\n\
             - Research relevant data and competitive intelligence\n\
             - Prepare to take detailed notes and action items\n\
             - Plan follow-up actions and next steps",
        ),
    };

    format!(
        "**[EXPLORATION SCENARIO - Not from your calendar]**\n\n\
         This is a hypothetical high-value scenario designed to explore complex meeting preparation.\n\n\
         Scenario: {title}\n\
         Timeframe: This meeting is scheduled {lead_time} days from now.\n\n\
         {scenario}\n\n\
         {role_context}\n\n\
         Meeting Details:\n\
         - Category: {category}\n\
         - Complexity: {complexity}\n\
         - Lead Time Available: {lead_time} days until the meeting\n\
         - Expected Attendees: ~{attendees} people\n\n\
         Please create a comprehensive workback plan for this scenario:\n\n\
         {role_tasks}",
        title = scenario.title,
        lead_time = scenario.lead_time_days,
        scenario = scenario.scenario,
        role_context = role_context,
        category = scenario.display_category,
        complexity = scenario.complexity.as_str().to_uppercase(),
        attendees = scenario.attendees,
        role_tasks = role_tasks,
    )
}

fn synthetic_entry(id: usize, scenario: &SyntheticScenario) -> PromptEntry {
    PromptEntry {
        id,
        title: scenario.title.to_string(),
        category: scenario.display_category.to_string(),
        complexity: scenario.complexity,
        lead_time: scenario.lead_time_days,
        description: scenario.description.to_string(),
        attendees: scenario.attendees,
        user_role: scenario.user_role,
        value_score: SYNTHETIC_SCORE,
        reasoning: SYNTHETIC_REASONING.to_string(),
        auto_selected: true,
        is_synthetic: true,
        prompt: synthetic_prompt(scenario),
        expected_tools: scenario
            .expected_tools
            .iter()
            .map(|t| t.to_string())
            .collect(),
        status: "not-started".to_string(),
        selected: false,
        meeting_date: format!("Future Date (+{} days)", scenario.lead_time_days),
        location: "TBD (Virtual/Hybrid)".to_string(),
        organizer: match scenario.user_role {
            UserRole::Organizer => "You (Organizer)".to_string(),
            UserRole::Participant => "TBD".to_string(),
        },
    }
}

fn meeting_entry(id: usize, meeting: &ScoredMeeting, auto_selected: bool) -> PromptEntry {
    let template = template_for(meeting.category);
    let dates = format_event_start(meeting.event.start_date_time());

    // Display date: formatted when the timestamp parsed, the raw string
    // otherwise, "Unknown" when there is none.
    let meeting_date = if dates.parsed {
        dates.datetime.clone()
    } else {
        meeting
            .event
            .start_date_time()
            .unwrap_or("Unknown")
            .to_string()
    };

    PromptEntry {
        id,
        title: meeting.event.subject_or_untitled().to_string(),
        category: meeting.category.as_str().to_string(),
        complexity: template.complexity,
        lead_time: template.lead_time_days,
        description: truncate_chars(meeting.event.body_preview.as_deref().unwrap_or(""), 200),
        attendees: meeting.event.attendee_count(),
        user_role: meeting.role,
        value_score: meeting.score,
        reasoning: meeting.reasoning.clone(),
        auto_selected,
        is_synthetic: false,
        prompt: meeting_prompt(meeting),
        expected_tools: template
            .expected_tools
            .iter()
            .map(|t| t.to_string())
            .collect(),
        status: "not-started".to_string(),
        selected: false,
        meeting_date,
        location: meeting
            .event
            .location_name()
            .unwrap_or("Teams Meeting")
            .to_string(),
        organizer: meeting.event.organizer_display(),
    }
}

/// Assemble the final package: 5 synthetic scenarios, then the featured
/// meetings, then the candidates, with one continuous 1-based id sequence
/// across all three buckets.
pub fn build_prompt_entries(selection: &Selection) -> Vec<PromptEntry> {
    let mut entries = Vec::with_capacity(
        SYNTHETIC_SCENARIOS.len() + selection.featured.len() + selection.candidates.len(),
    );
    let mut id = 1;

    for scenario in &SYNTHETIC_SCENARIOS {
        entries.push(synthetic_entry(id, scenario));
        id += 1;
    }
    for meeting in &selection.featured {
        entries.push(meeting_entry(id, meeting, true));
        id += 1;
    }
    for meeting in &selection.candidates {
        entries.push(meeting_entry(id, meeting, false));
        id += 1;
    }

    entries
}
