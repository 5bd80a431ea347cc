//! Prompt templates for the advice and chat endpoints.
//!
//! Each advice template carries exactly one `{text}` slot for the user's
//! combined context. Replace the slot before sending; never send a template
//! with the slot still in place.

use serde::{Deserialize, Serialize};

/// Discriminator selecting which prompt template steers the model.
///
/// Deserialization is deliberately permissive: an absent or unrecognized
/// value falls back to `General` rather than rejecting the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceType {
    NetworkingPrep,
    InterviewPrep,
    EmailDraft,
    #[default]
    #[serde(other)]
    General,
}

impl AdviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdviceType::NetworkingPrep => "networking_prep",
            AdviceType::InterviewPrep => "interview_prep",
            AdviceType::EmailDraft => "email_draft",
            AdviceType::General => "general",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            AdviceType::NetworkingPrep => NETWORKING_PREP_TEMPLATE,
            AdviceType::InterviewPrep => INTERVIEW_PREP_TEMPLATE,
            AdviceType::EmailDraft => EMAIL_DRAFT_TEMPLATE,
            AdviceType::General => GENERAL_TEMPLATE,
        }
    }
}

/// Substitutes the user's text into the template for the given advice type.
pub fn build_advice_prompt(advice_type: AdviceType, text: &str) -> String {
    advice_type.template().replace("{text}", text)
}

/// Builds the single-turn chat prompt. The caller owns all conversation
/// state: prior turns arrive only as the optional `context` string.
pub fn build_chat_prompt(message: &str, context: Option<&str>) -> String {
    match context.filter(|c| !c.trim().is_empty()) {
        Some(context) => format!(
            "Previous context: {context}\n\n\
             User question: {message}\n\n\
             As an AI networking assistant, provide a helpful response."
        ),
        None => format!("As an AI networking assistant, answer this question:\n\n{message}"),
    }
}

const NETWORKING_PREP_TEMPLATE: &str = r#"You are an expert networking coach. The user has provided detailed information about their networking situation.

Based on their information:
- Background: Who they are and their interests
- Goal: What they want to achieve
- Audience: Who they're talking to
- Platform: Where the interaction is happening (e.g., Career Fair, LinkedIn, email)
- Tone: Their preferred communication style (confident/friendly/professional/casual)
- Prior Interaction: Whether they've connected with these people before
- Help Needed: Specific areas where they need assistance

User's Complete Context:
{text}

Please provide comprehensive, personalized networking advice that includes:
1. A tailored elevator pitch (30-60 seconds) based on their background and goals
2. 3-5 specific conversation starters appropriate for their audience and platform
3. Key talking points they should emphasize given their background
4. Tips for making meaningful connections in their specific context
5. A follow-up strategy (what to say/do after the initial interaction)
6. Common pitfalls to avoid in their situation

Make sure your advice matches their preferred tone and takes into account whether this is a first-time or follow-up interaction."#;

const INTERVIEW_PREP_TEMPLATE: &str = r#"You are an experienced career coach. The user has provided detailed information about their interview preparation needs.

Based on their information:
- Background: Who they are and their experience
- Goal: What position/opportunity they're pursuing
- Audience: Who will be interviewing them
- Platform: Interview format (in-person, video call, phone, etc.)
- Tone: Their preferred communication style
- Prior Interaction: Whether they've spoken with the company/interviewer before
- Help Needed: Specific interview preparation needs

User's Complete Context:
{text}

Please provide comprehensive interview preparation advice including:
1. A strong opening introduction that highlights their background effectively
2. 5-7 compelling answers to common interview questions tailored to their experience
3. 3-5 insightful questions they should ask the interviewer
4. Strategies to showcase their relevant skills and experience
5. Tips for addressing potential weaknesses or gaps
6. Platform-specific advice (e.g., video call best practices if applicable)
7. Follow-up actions after the interview

Ensure the advice matches their preferred tone and considers any prior interactions they've mentioned."#;

const EMAIL_DRAFT_TEMPLATE: &str = r#"You are a professional communication expert. The user needs help drafting a networking or professional email.

Based on their information:
- Background: Who they are
- Goal: What they want to accomplish with this email
- Audience: Who they're writing to
- Platform: Email context (cold email, LinkedIn, follow-up, etc.)
- Tone: Preferred writing style (confident/friendly/professional/casual)
- Prior Interaction: Whether they've communicated with the recipient before
- Help Needed: Type of email needed (introduction, follow-up, request, etc.)

User's Complete Context:
{text}

Please provide:
1. A complete email draft with:
   - Compelling subject line
   - Professional greeting
   - Strong opening that establishes connection/context
   - Clear body explaining their background and purpose
   - Specific call-to-action
   - Professional closing
2. Alternative subject line options (2-3)
3. Tips for personalizing the email further
4. Best timing/follow-up strategy
5. Common mistakes to avoid

The email should match their preferred tone while remaining professional and appropriate for their audience."#;

const GENERAL_TEMPLATE: &str = r#"You are an AI networking assistant. The user has provided information about their networking needs.

User has shared:
- Background: Their professional/academic identity
- Goal: What they want to achieve
- Audience: Who they need to connect with
- Platform: Where/how they're networking
- Tone: Their preferred communication style
- Prior Interaction: Their relationship history with the audience
- Help Needed: What specific assistance they need

User's Complete Context:
{text}

Please provide:
1. Analysis of their situation and networking approach
2. Personalized strategies based on their specific context
3. Actionable next steps they can take immediately
4. Resources or techniques relevant to their platform/audience
5. Long-term networking advice for their goals

Tailor all advice to their background, goals, and preferred tone."#;
