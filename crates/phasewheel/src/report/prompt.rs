//! Prompt text and chat-completion payload for synthesis reports.
//!
//! Nothing here talks to the network; the payload is handed to whatever
//! transport the caller uses.

use crate::report::request::ValidatedReport;
use crate::resolver::PhaseAspectResult;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub const DEFAULT_MODEL: &str = "anthropic/claude-3.5-sonnet";

/// Number of shadow patterns quoted per sign
const SHADOW_PATTERNS_PER_SIGN: usize = 3;

const PHASE_MODE_INSTRUCTIONS: &str = "**PHASE-SPECIFIC SYNTHESIS MODE**:
When phase context is provided in the user message, it represents the EVOLUTIONARY STAGE of the planetary relationship. This is your primary lens for interpretation.

- The PHASE (not the aspect) contains the evolutionary/psychological knowledge
- Weave phase themes organically through ALL 4 sections
- Adjust tone and developmental focus based on the phase's keyword and description
- Connect phase dynamics to the specific zodiac sign placements
- The phase reveals WHERE the person is in their developmental journey with these planetary energies

";

const STYLE_GUIDE: &str = "TONE & STYLE:
- Write with warmth, depth, and insight while remaining grounded and practical
- Your tone is supportive and direct, helping people understand their evolutionary journey
- Write in a flowing, readable style with clear paragraphs
- Address the reader directly as \"you\"
- Be specific to THIS combination rather than generic

LANGUAGE GUIDELINES (VERY IMPORTANT):
- Use practical, human, psychological language
- NOT spiritual, abstract, or \"woo-woo\"
- Be specific and concrete, not vague
- Keep sentences direct and clear
- Avoid phrases like \"cosmic dance\", \"divine essence\", \"sacred journey\" - instead use grounded psychological language
- When asking reflection questions, make them practical and answerable, e.g.:
  - \"Where in your life do you resist change even when you know it's necessary?\"
  - \"What happens in your body when you feel unseen or unrecognized?\"
  - \"How do you typically respond when your beliefs are challenged by reality?\"

FORMAT:
- Use ## headings for each section
- Write in flowing paragraphs (not bullet points)
- Each section should be 1 substantial paragraph";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Body of an OpenAI-style streaming chat-completion call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

/// System and user prompt for one report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPrompt {
    pub system: String,
    pub user: String,
}

impl ReportPrompt {
    pub fn into_chat_request(self, model: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: ChatRole::System,
                    content: self.system,
                },
                ChatMessage {
                    role: ChatRole::User,
                    content: self.user,
                },
            ],
            stream: true,
        }
    }
}

pub fn build_system_prompt(with_phase_context: bool) -> String {
    let mut prompt = String::from(
        "You are an expert evolutionary astrologer deeply versed in Jeffrey Wolf Green's teachings.\n\n",
    );
    if with_phase_context {
        prompt.push_str(PHASE_MODE_INSTRUCTIONS);
    }
    prompt.push_str(STYLE_GUIDE);
    prompt
}

/// Phase block embedded in the user prompt. Empty when no phase matched.
pub fn build_phase_context(result: &PhaseAspectResult<'_>) -> String {
    let Some(phase) = result.phase else {
        return String::new();
    };

    let mut out = String::new();
    let _ = write!(
        out,
        "\n\n## PHASE CONTEXT (CRITICAL)\n\n\
         The planetary pair is in the **{}** ({} zodiacal correlation, {} element).\n\n\
         **Phase Keyword**: {}\n\n\
         **Evolutionary Focus**: {}\n\n\
         **Phase Description**: {}\n\n",
        phase.name,
        phase.zodiac_sign,
        phase.element,
        phase.keyword,
        phase.evolutionary_focus,
        phase.description,
    );

    if let Some(aspect) = result.aspect {
        let _ = write!(
            out,
            "**Associated Aspect**: {} ({}°) - This is the measurement that identifies this phase. \
             Focus on the PHASE meaning, not traditional aspect interpretation.",
            aspect.name, aspect.degrees,
        );
    }

    let _ = write!(
        out,
        "\n\n---\n\n\
         **INTEGRATION INSTRUCTIONS**:\n\
         The phase represents WHERE the individual is in the evolutionary cycle between these two planets. \
         This is THE PRIMARY context for your synthesis.\n\n\
         Weave this phase dynamic throughout ALL 4 sections:\n\
         1. **Evolutionary Intention**: How does the {name} theme ({focus}) inform the developmental purpose of this pairing?\n\
         2. **Struggles & Dilemmas**: What specific challenges arise from being in the {name}? Connect to \"{keyword}\"\n\
         3. **Working Together**: When these energies cooperate, how do they express the {name} potential?\n\
         4. **Self-Reflection**: Craft questions that help the person identify where they are in this {name} journey\n\n\
         The phase reveals the DEVELOPMENTAL STAGE of consciousness for this planetary relationship. \
         Let it inform tone, focus, and depth of all sections.\n\n---\n",
        name = phase.name,
        focus = phase.evolutionary_focus,
        keyword = phase.keyword,
    );

    out
}

pub fn build_user_prompt(report: &ValidatedReport) -> String {
    let (p1, p2) = (report.planet1, report.planet2);
    let (s1, s2) = (report.sign1, report.sign2);
    let phase_context = report
        .phase_context
        .as_ref()
        .map(build_phase_context)
        .unwrap_or_default();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Generate a synthesis report for someone with {} in {} and {} in {}.\n",
        p1.name, s1.name, p2.name, s2.name
    );
    let _ = writeln!(out, "## CONTEXT\n");
    let _ = writeln!(out, "### The Planetary Pair: {}/{}", p1.name, p2.name);
    let _ = writeln!(out, "**Theme**: {}", report.pair.theme);
    let _ = writeln!(out, "**Meaning**: {}\n", report.pair.meaning);

    for planet in [p1, p2] {
        let _ = writeln!(out, "### {} Archetype", planet.name);
        let _ = writeln!(out, "{}: {}\n", planet.archetype, planet.description);
    }

    for sign in [s1, s2] {
        let shadows: Vec<&str> = sign
            .shadow_aspects
            .iter()
            .take(SHADOW_PATTERNS_PER_SIGN)
            .map(String::as_str)
            .collect();
        let _ = writeln!(out, "### {} ({})", sign.name, sign.symbol);
        let _ = writeln!(out, "**Archetype**: {}", sign.archetype);
        let _ = writeln!(out, "**Keywords**: {}", sign.keywords.join(", "));
        let _ = writeln!(out, "**Essence**: {}", sign.essence);
        let _ = writeln!(out, "**Evolutionary Teaching**: {}", sign.evolutionary_teaching);
        let _ = writeln!(out, "**Shadow Patterns**: {}\n", shadows.join("; "));
    }

    out.push_str(&phase_context);
    out.push_str("\n\n---\n\n## GENERATE THESE 4 SECTIONS:\n\n");
    if !phase_context.is_empty() {
        out.push_str("**NOTE**: The phase context above must be integrated throughout your response.\n\n");
    }

    let _ = write!(
        out,
        "### Section 1: The Evolutionary Intention of This Combination\n\
         Write ONE substantial paragraph synthesizing what it means to have {p1} in {s1} and {p2} in {s2} together. \
         What is the soul working toward? What is the evolutionary direction? Be specific to this exact combination.\n\n\
         ### Section 2: Potential Struggles & Dilemmas\n\
         Write ONE substantial paragraph about what can go wrong with this combination. What are the tensions, \
         the unintegrated expressions, the shadow patterns that emerge when these archetypes aren't working together well? \
         Reference the specific shadow aspects of both signs.\n\n\
         ### Section 3: When These Energies Work Together\n\
         Write ONE substantial paragraph describing what successful integration looks like. What does it look like \
         when someone has mastered this combination? How do these energies support each other?\n\n\
         ### Section 4: Questions for Self-Reflection\n\
         Provide 4-5 specific, grounded, psychological questions that help the reader connect to these patterns \
         within themselves. Make them practical and answerable. They should be specific to {s1} and {s2} archetypes \
         and the {p1}/{p2} dynamic.\n\n---\n\n\
         Format your response with ## headings for each section exactly as shown above.",
        p1 = p1.name,
        p2 = p2.name,
        s1 = s1.name,
        s2 = s2.name,
    );

    out
}

/// System and user prompt for a validated request.
pub fn build_prompt(report: &ValidatedReport) -> ReportPrompt {
    ReportPrompt {
        system: build_system_prompt(report.phase_context.is_some()),
        user: build_user_prompt(report),
    }
}
