//! Built-in training scenarios

use crate::catalog::ScenarioCatalog;
use crate::scenario::{AffectedPerson, Scenario, Step, StepKind};
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Built-in scenario ids, in catalog order
pub const BUILTIN_IDS: [&str; 3] = ["phishing", "bias", "privacy"];

pub(crate) static BUILTIN_CATALOG: Lazy<Arc<ScenarioCatalog>> = Lazy::new(|| {
    Arc::new(
        ScenarioCatalog::new()
            .with_scenario("phishing", phishing())
            .with_scenario("bias", bias())
            .with_scenario("privacy", privacy()),
    )
});

fn phishing() -> Scenario {
    Scenario::new("Phishing Ethics")
        .with_step(
            Step::plain(
                "Understand the Tool",
                "You have access to an AI that can generate convincing phishing emails.",
                "Who should the AI target?",
            )
            .with_options(["General public", "Elderly users", "Students", "Small businesses"]),
        )
        .with_step(
            Step::plain(
                "Generate Content",
                "The AI creates an email pretending to be from \"IT Support\"",
                "Here is the generated email:",
            )
            .with_kind(StepKind::EmailPreview {
                email: "URGENT: Your account will be locked in 24 hours unless you verify \
                        your credentials. Click here to maintain access."
                    .to_string(),
            }),
        )
        .with_step(
            Step::plain(
                "Consequence Visualization",
                "See who would be affected by this email",
                "Make an ethical decision based on impact",
            )
            .with_kind(StepKind::ConsequenceGate {
                affected: vec![
                    AffectedPerson::new(
                        "👵",
                        "Maria, 72",
                        "Recently widowed, uses email to stay connected with family",
                        "Would likely click and lose savings",
                    ),
                    AffectedPerson::new(
                        "👨‍🏫",
                        "David, 42",
                        "Teacher, works 60-hour weeks",
                        "Would click during break, exposing student data",
                    ),
                    AffectedPerson::new(
                        "👩‍🍳",
                        "Lena, 35",
                        "Runs a family bakery",
                        "Could bankrupt the business",
                    ),
                ],
            }),
        )
        .with_step(
            Step::plain(
                "Reflection",
                "What did you learn about the human impact?",
                "Share your thoughts",
            )
            .with_kind(StepKind::ReflectionGate),
        )
}

fn bias() -> Scenario {
    Scenario::new("AI Bias Check")
        .with_step(
            Step::plain(
                "Test the AI",
                "An AI hiring tool is being evaluated",
                "Check for bias in these resumes",
            )
            .with_options([
                "Resume A: \"John\", Ivy League",
                "Resume B: \"Maria\", State College",
            ]),
        )
        .with_step(
            Step::plain(
                "Compare the Scores",
                "Both resumes list the same skills and experience, yet the tool ranks them differently",
                "Which signal do you think the model relied on?",
            )
            .with_options(["Name", "School prestige", "Formatting", "Nothing, the scores are fair"]),
        )
        .with_step(
            Step::plain(
                "Reflection",
                "Automated screening can repeat historical bias at scale",
                "Share your thoughts",
            )
            .with_kind(StepKind::ReflectionGate),
        )
}

fn privacy() -> Scenario {
    Scenario::new("Data Scraping Ethics")
        .with_step(
            Step::plain(
                "Collect the Data",
                "A support forum is publicly readable, and an AI can scrape every post into a training set.",
                "What would you collect?",
            )
            .with_options(["Everything", "Only posts, no usernames", "Nothing without consent"]),
        )
        .with_step(
            Step::plain(
                "Who Is Exposed",
                "Forum posts often contain health and money worries written under real names",
                "Decide whether the scrape goes ahead",
            )
            .with_kind(StepKind::ConsequenceGate {
                affected: vec![
                    AffectedPerson::new(
                        "🧑‍💻",
                        "Sam, 29",
                        "Posted about a diagnosis while job hunting",
                        "Could be identified by a future employer",
                    ),
                    AffectedPerson::new(
                        "👴",
                        "Tom, 68",
                        "Asked for help recovering a scammed pension",
                        "Becomes a target list entry for the next scam",
                    ),
                ],
            }),
        )
        .with_step(
            Step::plain(
                "Reflection",
                "Public is not the same as consented",
                "Share your thoughts",
            )
            .with_kind(StepKind::ReflectionGate),
        )
}
