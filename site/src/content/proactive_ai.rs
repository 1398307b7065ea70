//! "Proactive AI" section copy: four feature blocks, each with a live preview.

use super::{Badge, Headline, TypingText};
use serde::{Deserialize, Serialize};

/// A calendar entry in the meetings preview.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Meeting name
    pub title: String,
    /// Time range, e.g. `"10:30 - 11:00"`
    pub time: String,
    /// Meeting kind or counterpart organisation
    #[serde(rename = "type")]
    pub kind: String,
}

/// Upcoming meetings plus the brief being drafted for them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingsPreview {
    /// Calendar entries
    pub meetings: Vec<Meeting>,
    /// Brief being typed
    pub context: TypingText,
}

/// Severity of an analytics alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// Something is going wrong
    Risk,
    /// Suggested next step
    Recommendation,
}

impl AlertKind {
    /// Lowercase name, also used as a class suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Risk => "risk",
            AlertKind::Recommendation => "recommendation",
        }
    }
}

/// One analytics card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Severity
    #[serde(rename = "type")]
    pub kind: AlertKind,
    /// Card heading
    pub label: String,
    /// Confidence figure shown next to the heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,
    /// Card body
    pub text: String,
}

/// Pipeline alerts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsPreview {
    /// Alerts, most urgent first
    pub alerts: Vec<Alert>,
}

/// Company knowledge search box.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgePreview {
    /// Query being typed
    pub search: TypingText,
}

/// Assistant state during a live conversation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowPreview {
    /// Current phase label
    pub phase: String,
    /// Notes being typed
    pub context: TypingText,
}

/// The preview rendered inside a block, tagged by kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum BlockContent {
    /// Calendar with briefs
    Meetings(MeetingsPreview),
    /// Risk and recommendation cards
    Analytics(AnalyticsPreview),
    /// Knowledge search
    Knowledge(KnowledgePreview),
    /// Live call assistant
    Workflow(WorkflowPreview),
}

impl BlockContent {
    /// The serialized tag, also used as a class suffix.
    pub fn kind(&self) -> &'static str {
        match self {
            BlockContent::Meetings(_) => "meetings",
            BlockContent::Analytics(_) => "analytics",
            BlockContent::Knowledge(_) => "knowledge",
            BlockContent::Workflow(_) => "workflow",
        }
    }
}

/// One feature block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProactiveAiBlock {
    /// Stable anchor id
    pub id: String,
    /// Card heading
    pub title: String,
    /// Card lead
    pub description: String,
    /// Emoji shown next to the heading
    pub icon: String,
    /// Live preview
    pub content: BlockContent,
    /// Action lines, conventionally `"<phase>: <text>"`
    pub actions: Vec<String>,
    /// Roles the block speaks to
    pub roles: Vec<String>,
}

/// An action line split into its phase prefix and body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionLine<'a> {
    /// Leading phase such as `"Morning"`, when the line has one
    pub phase: Option<&'a str>,
    /// The rest of the line
    pub text: &'a str,
}

impl<'a> ActionLine<'a> {
    /// Split on the first `": "`.
    pub fn parse(line: &'a str) -> Self {
        match line.split_once(": ") {
            Some((phase, text)) if !phase.is_empty() => ActionLine {
                phase: Some(phase),
                text,
            },
            _ => ActionLine { phase: None, text: line },
        }
    }
}

impl ProactiveAiBlock {
    /// Action lines split into phase and body.
    pub fn action_lines(&self) -> impl Iterator<Item = ActionLine<'_>> {
        self.actions.iter().map(|line| ActionLine::parse(line))
    }
}

/// Everything the Proactive AI section renders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProactiveAiContent {
    /// Pill above the headline
    pub badge: Badge,
    /// Two-line headline
    pub headline: Headline,
    /// Lead paragraph
    pub description: String,
    /// Feature blocks, in display order
    pub blocks: Vec<ProactiveAiBlock>,
}

impl ProactiveAiContent {
    /// Look a block up by its id.
    pub fn block(&self, id: &str) -> Option<&ProactiveAiBlock> {
        self.blocks.iter().find(|block| block.id == id)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn typing(label: &str, text: &str) -> TypingText {
    TypingText {
        label: label.into(),
        text: text.into(),
        has_cursor: true,
    }
}

fn meeting(title: &str, time: &str, kind: &str) -> Meeting {
    Meeting {
        title: title.into(),
        time: time.into(),
        kind: kind.into(),
    }
}

/// The Morr.ai "Proactive AI" copy.
pub fn proactive_ai_content() -> ProactiveAiContent {
    ProactiveAiContent {
        badge: Badge {
            text: "Proactive AI".into(),
            icon: None,
        },
        headline: Headline {
            primary: "AI-Powered Outcomes for".into(),
            secondary: "Every Sales Role".into(),
            accent: "Every Sales Role".into(),
        },
        description: "From meeting prep to deal insights, Morr.ai helps teams achieve better \
                      results with less effort through AI that works before you ask."
            .into(),
        blocks: vec![
            ProactiveAiBlock {
                id: "eliminate-prep".into(),
                title: "Eliminate Prep Work".into(),
                description: "Focus on selling while AI handles the operational heavy lifting \
                              before you even ask."
                    .into(),
                icon: "🕐".into(),
                content: BlockContent::Meetings(MeetingsPreview {
                    meetings: vec![
                        meeting("Team Standup", "10:30 - 11:00", "Internal Meeting"),
                        meeting("Integration Planning", "13:00 - 13:45", "DataFlow Inc"),
                        meeting("Quarterly Review", "15:30 - 17:00", "InnovateTech"),
                    ],
                    context: typing(
                        "Historical Context",
                        "Sprint planning completed yesterday. New f|",
                    ),
                }),
                actions: strings(&[
                    "Morning: Start your day with AI-generated briefs for all meetings",
                    "Pre-meeting: Client history, recent changes, and talking points automatically prepared",
                    "End of day: Tomorrow's meetings already analyzed and prepped",
                ]),
                roles: strings(&["Sales Reps", "Account Execs", "Leaders"]),
            },
            ProactiveAiBlock {
                id: "smarter-decisions".into(),
                title: "Make Smarter Decisions".into(),
                description: "Access real-time analytics that highlight risks and opportunities \
                              across your entire pipeline."
                    .into(),
                icon: "📊".into(),
                content: BlockContent::Analytics(AnalyticsPreview {
                    alerts: vec![
                        Alert {
                            kind: AlertKind::Risk,
                            label: "Deal Risk Alert".into(),
                            percentage: Some("87%".into()),
                            text: "Acme Corp deal likely to delay 2 weeks based on communication patterns"
                                .into(),
                        },
                        Alert {
                            kind: AlertKind::Recommendation,
                            label: "Recommended Action".into(),
                            percentage: None,
                            text: "Call John Smith today - address pricing concerns".into(),
                        },
                    ],
                }),
                actions: strings(&[
                    "Planning: Predictive forecasting and trend analysis at your fingertips",
                    "Mid-quarter: Early warning system for at-risk deals",
                    "Reviews: Automated performance insights across all reps",
                ]),
                roles: strings(&["Sales Leaders", "Operations", "Executives"]),
            },
            ProactiveAiBlock {
                id: "know-everything".into(),
                title: "Know Everything, Forget Nothing".into(),
                description: "Tap into your organization's collective wisdom. Access \
                              institutional knowledge, past decisions, and cross-team insights \
                              that would otherwise be lost."
                    .into(),
                icon: "🧠".into(),
                content: BlockContent::Knowledge(KnowledgePreview {
                    search: typing(
                        "Search Company Knowledge",
                        "New hire asking about our sales process |",
                    ),
                }),
                actions: strings(&[
                    "Onboarding: New hires instantly access years of project decisions and context",
                    "Planning: Surface how other teams solved similar challenges before",
                    "Strategy: Historical patterns and outcomes inform new initiatives",
                ]),
                roles: strings(&["Leadership", "New Hires", "Project Managers"]),
            },
            ProactiveAiBlock {
                id: "focus-matters".into(),
                title: "Focus on What Matters".into(),
                description: "Let AI handle research and follow-ups while you focus on building \
                              client relationships."
                    .into(),
                icon: "🎯".into(),
                content: BlockContent::Workflow(WorkflowPreview {
                    phase: "Live conversation".into(),
                    context: typing("During Client Call", "Cli|"),
                }),
                actions: strings(&[
                    "Before calls: Complete client context and competitive intelligence",
                    "During: Real-time access to relevant information",
                    "After: Automated follow-ups and next step tracking",
                ]),
                roles: strings(&["Sales Reps", "Account Execs", "Success"]),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blocks_are_in_display_order() {
        let content = proactive_ai_content();
        let ids: Vec<&str> = content.blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["eliminate-prep", "smarter-decisions", "know-everything", "focus-matters"]
        );
        let kinds: Vec<&str> = content.blocks.iter().map(|b| b.content.kind()).collect();
        assert_eq!(kinds, vec!["meetings", "analytics", "knowledge", "workflow"]);
    }

    #[test]
    fn every_block_has_three_actions_and_roles() {
        for block in proactive_ai_content().blocks {
            assert_eq!(block.actions.len(), 3, "{}", block.id);
            assert_eq!(block.roles.len(), 3, "{}", block.id);
        }
    }

    #[test]
    fn block_lookup() {
        let content = proactive_ai_content();
        let block = content.block("focus-matters").unwrap();
        assert_eq!(block.title, "Focus on What Matters");
        assert!(content.block("missing").is_none());
    }

    #[test]
    fn action_lines_split_on_phase() {
        let content = proactive_ai_content();
        let block = content.block("eliminate-prep").unwrap();
        let lines: Vec<ActionLine<'_>> = block.action_lines().collect();
        assert_eq!(lines[0].phase, Some("Morning"));
        assert_eq!(lines[2].phase, Some("End of day"));
        assert_eq!(lines[2].text, "Tomorrow's meetings already analyzed and prepped");
    }

    #[test]
    fn action_line_without_phase() {
        assert_eq!(
            ActionLine::parse("No phase here"),
            ActionLine { phase: None, text: "No phase here" }
        );
        assert_eq!(
            ActionLine::parse(": leading separator"),
            ActionLine { phase: None, text: ": leading separator" }
        );
    }

    #[test]
    fn preview_is_tagged_by_type() {
        let content = proactive_ai_content();
        let json = serde_json::to_value(&content.blocks[1]).unwrap();
        assert_eq!(json["content"]["type"], "analytics");
        assert_eq!(json["content"]["data"]["alerts"][0]["type"], "risk");
        assert_eq!(json["content"]["data"]["alerts"][0]["percentage"], "87%");
        assert!(json["content"]["data"]["alerts"][1].get("percentage").is_none());
    }

    #[test]
    fn meetings_keep_type_key() {
        let content = proactive_ai_content();
        let json = serde_json::to_value(&content.blocks[0].content).unwrap();
        assert_eq!(json["data"]["meetings"][1]["type"], "DataFlow Inc");
        assert_eq!(json["data"]["context"]["hasCursor"], true);
    }

    #[test]
    fn round_trips_through_json() {
        let content = proactive_ai_content();
        let text = serde_json::to_string_pretty(&content).unwrap();
        let back: ProactiveAiContent = serde_json::from_str(&text).unwrap();
        assert_eq!(back, content);
    }
}
