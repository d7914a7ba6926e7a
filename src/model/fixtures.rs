//! Static mock data backing every screen.

use super::{AnalysisStep, CaseSummary, ChatMessage, RadarItem, RadarStatus, SessionData};
use chrono::{DateTime, TimeZone, Utc};

/// A stored chat session with its transcript.
#[derive(Debug, Clone, Copy)]
pub struct ChatFixture {
    pub id: &'static str,
    pub tool_name: &'static str,
    pub title: &'static str,
    pub updated: &'static str,
    pub transcript: &'static [(bool, &'static str)],
}

impl ChatFixture {
    #[must_use]
    pub fn session(&self) -> SessionData {
        SessionData::new(self.id, self.tool_name, self.title)
    }

    /// Transcript as chat messages; `true` marks a user turn.
    #[must_use]
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.transcript
            .iter()
            .map(|(is_user, text)| {
                if *is_user {
                    ChatMessage::user(*text)
                } else {
                    ChatMessage::assistant(*text)
                }
            })
            .collect()
    }
}

pub const CHAT_SESSIONS: &[ChatFixture] = &[
    ChatFixture {
        id: "s-101",
        tool_name: "Legal Research",
        title: "Anticipatory bail under Section 438",
        updated: "2 hours ago",
        transcript: &[
            (true, "What are the conditions for anticipatory bail under Section 438 CrPC?"),
            (false, "Courts weigh the nature of the accusation, the applicant's antecedents, the possibility of fleeing justice and whether the accusation aims to humiliate. Sushila Aggarwal (2020) holds that protection need not be limited in time."),
        ],
    },
    ChatFixture {
        id: "s-102",
        tool_name: "Drafting",
        title: "Legal notice for cheque dishonour",
        updated: "Yesterday",
        transcript: &[
            (true, "Draft a notice under Section 138 of the NI Act for a dishonoured cheque of Rs 2,50,000."),
            (false, "Draft prepared: notice of demand within 30 days of the return memo, calling for payment within 15 days of receipt, with cheque particulars and bank memo reference."),
        ],
    },
    ChatFixture {
        id: "s-103",
        tool_name: "Translation",
        title: "Sale deed (Hindi to English)",
        updated: "3 days ago",
        transcript: &[
            (true, "Translate pages 2 and 3 of the uploaded sale deed into English."),
            (false, "Pages 2 and 3 translated. Schedule of property and covenants retained in the original order."),
        ],
    },
    ChatFixture {
        id: "s-104",
        tool_name: "Cross Examination",
        title: "PW-2 eyewitness statement",
        updated: "Last week",
        transcript: &[
            (true, "Prepare cross-examination questions for PW-2 based on the Section 161 statement."),
            (false, "Twelve questions prepared, focusing on lighting conditions, distance from the incident and the delay in recording the statement."),
        ],
    },
    ChatFixture {
        id: "s-105",
        tool_name: "Contract Review",
        title: "Vendor MSA indemnity clause",
        updated: "Last month",
        transcript: &[
            (true, "Is the indemnity clause in this MSA one-sided?"),
            (false, "The clause is uncapped and excludes the vendor's own negligence, which is unusual. Consider a mutual cap tied to fees paid."),
        ],
    },
];

#[must_use]
pub fn chat_fixture(id: &str) -> Option<&'static ChatFixture> {
    CHAT_SESSIONS.iter().find(|s| s.id == id)
}

/// Canned assistant reply for a message sent in a tool chat.
#[must_use]
pub fn canned_reply(tool_name: &str, prompt: &str) -> String {
    let topic = prompt.trim();
    match tool_name {
        "Drafting" => format!("Here is a first draft addressing \"{topic}\". Review the recitals and the operative clauses before sending."),
        "Translation" => format!("Translation queued for \"{topic}\". Legal terms of art are kept in the source language with a gloss."),
        "Cross Examination" => format!("Suggested line of questioning on \"{topic}\": establish the timeline, then confront with the prior statement."),
        _ => format!("I found three authorities relevant to \"{topic}\". The leading judgment is summarised first, followed by dissenting views."),
    }
}

pub const CASES: &[CaseSummary] = &[
    CaseSummary {
        id: "c-1",
        title: "State v. Mehra",
        citation: "CRL.A. 412/2023",
        court: "Delhi High Court",
        decided: "2024-02-14",
        status: "Hearing scheduled",
        summary: "Appeal against conviction under Section 304 Part II. Key issue is the admissibility of the dying declaration.",
    },
    CaseSummary {
        id: "c-2",
        title: "Rao Textiles v. Union of India",
        citation: "W.P.(C) 9981/2022",
        court: "Bombay High Court",
        decided: "2023-11-03",
        status: "Reserved for judgment",
        summary: "Challenge to retrospective levy of anti-dumping duty on imported yarn.",
    },
    CaseSummary {
        id: "c-3",
        title: "Green Earth Trust v. State of Kerala",
        citation: "O.A. 56/2024",
        court: "National Green Tribunal",
        decided: "2024-05-20",
        status: "Notice issued",
        summary: "Application against quarrying within the eco-sensitive zone of a wildlife sanctuary.",
    },
    CaseSummary {
        id: "c-4",
        title: "Sundaram Finance v. K. Prakash",
        citation: "Civil Appeal 1207/2021",
        court: "Supreme Court",
        decided: "2023-08-09",
        status: "Disposed",
        summary: "Scope of arbitral award enforcement against guarantors who were not signatories to the arbitration agreement.",
    },
    CaseSummary {
        id: "c-5",
        title: "In re Lakshmi Steel Ltd",
        citation: "Comp. App. (AT) 77/2024",
        court: "National Company Law Appellate Tribunal",
        decided: "2024-07-01",
        status: "Admitted",
        summary: "Priority of secured operational creditors in a resolution plan.",
    },
];

#[must_use]
pub fn case_by_id(id: &str) -> Option<&'static CaseSummary> {
    CASES.iter().find(|c| c.id == id)
}

/// Cases decided by any of the given courts, in fixture order.
#[must_use]
pub fn cases_for_courts(courts: &[String]) -> Vec<&'static CaseSummary> {
    CASES
        .iter()
        .filter(|c| courts.is_empty() || courts.iter().any(|name| name == c.court))
        .collect()
}

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .unwrap_or_default()
}

/// Radars present at start-up.
#[must_use]
pub fn sample_radars() -> Vec<RadarItem> {
    vec![
        RadarItem {
            id: "radar-1700000000000".to_string(),
            proposition: "Liability of intermediaries for user-generated defamatory content".to_string(),
            jurisdictions: vec!["Supreme Court".to_string(), "Delhi High Court".to_string()],
            status: RadarStatus::Active,
            notifications_enabled: true,
            cases_intercepted: 14,
            articles_intercepted: 6,
            created_at: at(2024, 1, 10, 9, 30, 0),
            last_activity: Some(at(2024, 6, 2, 17, 5, 0)),
        },
        RadarItem {
            id: "radar-1700000500000".to_string(),
            proposition: "Environmental clearance requirements for mining leases".to_string(),
            jurisdictions: vec!["National Green Tribunal".to_string()],
            status: RadarStatus::Inactive,
            notifications_enabled: false,
            cases_intercepted: 3,
            articles_intercepted: 1,
            created_at: at(2024, 3, 22, 11, 0, 0),
            last_activity: None,
        },
    ]
}

#[must_use]
pub fn analysis_steps() -> Vec<AnalysisStep> {
    vec![
        AnalysisStep::pending(1, "Reading case documents"),
        AnalysisStep::pending(2, "Extracting parties and timeline"),
        AnalysisStep::pending(3, "Identifying legal issues"),
        AnalysisStep::pending(4, "Matching precedents"),
        AnalysisStep::pending(5, "Drafting analysis summary"),
    ]
}

pub const ANALYSIS_FINDINGS: &[&str] = &[
    "Primary issue: admissibility of the dying declaration recorded without a magistrate.",
    "Supporting precedent: Laxman v. State of Maharashtra (2002) 6 SCC 710.",
    "Risk: medical evidence on the victim's fitness to make a statement is contested.",
    "Suggested next step: apply to summon the attending physician for cross-examination.",
];

/// Statements flagged as inconsistent with the client's narration.
pub const NARRATION_MISMATCHES: &[(&str, &str)] = &[
    (
        "Narration: arrived at 9 pm",
        "PW-2 statement: saw the accused at the gate at 8:15 pm",
    ),
    (
        "Narration: street light was off",
        "Site plan: street light marked functional",
    ),
];

/// Pages of the document loaded in the translation view.
pub const TRANSLATION_PAGES: &[&str] = &[
    "Cover and recitals",
    "Schedule of property",
    "Covenants of the vendor",
    "Payment terms",
    "Witness attestation",
    "Registration endorsement",
];

pub const NOTIFICATIONS: &[(&str, &str)] = &[
    ("Radar", "2 new judgments intercepted for 'Liability of intermediaries'"),
    ("Case", "State v. Mehra listed for hearing on Monday"),
    ("Billing", "Your trial ends in 5 days"),
    ("System", "Translation of 'Sale deed' is ready"),
];

pub const DOCUMENTS: &[(&str, &str, &str)] = &[
    ("Sale_deed_2019.pdf", "Translation", "6 pages"),
    ("PW2_statement.pdf", "Cross Examination", "4 pages"),
    ("MSA_vendor_v3.docx", "Contract Review", "18 pages"),
    ("Notice_S138_draft.docx", "Drafting", "2 pages"),
];

/// Tool catalogue: name, one-line description.
pub const TOOLS: &[(&str, &str)] = &[
    ("Legal Research", "Find and summarise authorities on a question of law"),
    ("Drafting", "Generate notices, petitions and agreements"),
    ("Translation", "Translate legal documents page by page"),
    ("Cross Examination", "Prepare questions and spot contradictions"),
    ("Precedent Radar", "Monitor courts for judgments on a proposition"),
    ("Case Analysis", "Structured analysis of a case file"),
];

/// Onboarding pages per tool.
#[must_use]
pub fn onboarding_pages(tool_name: &str) -> &'static [&'static str] {
    match tool_name {
        "Drafting" => &[
            "Describe the document you need and the parties involved.",
            "Jubee produces a first draft you can refine turn by turn.",
        ],
        "Translation" => &[
            "Open a document and pick the pages to translate.",
            "Terms of art keep their source-language form with a gloss.",
        ],
        "Cross Examination" => &[
            "Upload witness statements and your client's narration.",
            "Jubee flags contradictions and proposes questions.",
            "Review every flagged mismatch before the hearing.",
        ],
        _ => &[
            "Ask a question of law in plain language.",
            "Answers cite the authorities they rely on.",
        ],
    }
}
