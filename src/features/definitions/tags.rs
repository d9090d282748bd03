use serde::Serialize;

pub const TAG_COUNT: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub definition: &'static str,
}

/// Policy-feature tags in display order. `key` doubles as the column name in
/// `bill_data`, so it must stay a plain lowercase identifier.
pub static TAG_DEFINITIONS: [TagDefinition; TAG_COUNT] = [
    TagDefinition {
        key: "civil_penalties",
        name: "Civil Penalties",
        definition: "Applies any kind of civil penalty to violators (e.g., non-criminal penalties such as system suspension, civil fines, creation of private right-of-action to sue, profit disgorgement, suspension of noncompliant systems, punitive monitoring, or application of a separate civil enforcement statute).",
    },
    TagDefinition {
        key: "criminal_penalties",
        name: "Criminal Penalties",
        definition: "Applies any kind of criminal penalty to violators (e.g., criminal fines, incarceration, misdemeanor/felony designations).",
    },
    TagDefinition {
        key: "licensing_board_oversight",
        name: "Licensing Board Oversight",
        definition: "Applies any kind of oversight by state professional licensing boards (e.g., requiring board approval of MH-AI systems used in diagnosis/treatment or allowing boards to discipline individuals or systems).",
    },
    TagDefinition {
        key: "disclosure_consent",
        name: "Disclosure/Consent",
        definition: "Implements any requirement to disclose use or features of the AI system (including disclaimers) and/or consent to the use of such systems/features or the ability to revoke consent.",
    },
    TagDefinition {
        key: "discrimination_bias",
        name: "Discrimination/Bias",
        definition: "Implements any requirement regarding discrimination, bias, or fairness.",
    },
    TagDefinition {
        key: "risk_classification",
        name: "Risk Classification",
        definition: "Implements or defines the scope of the law by a risk classification system (e.g., \"high risk\" AI system, consequential decisions, and similar frameworks).",
    },
    TagDefinition {
        key: "data_protection",
        name: "Data Protection",
        definition: "Implements any requirements for data privacy, data security, or data retention/deletion (e.g., encryption requirements, secure storage, or data purging policies).",
    },
    TagDefinition {
        key: "prescribing",
        name: "Prescribing",
        definition: "Applies any requirements or waivers regarding prescriptions.",
    },
    TagDefinition {
        key: "practitioner_responsibilities",
        name: "Practitioner Responsibilities",
        definition: "Applies any kind of requirements on practitioners\u{2014}or waivers or exemptions\u{2014}related to their use of AI systems.",
    },
    TagDefinition {
        key: "monitoring",
        name: "Monitoring",
        definition: "Applies any kind of monitoring requirements for MH-AI (e.g., live supervision, submission to audits/documentation processes, generation of reports, or post-market surveillance).",
    },
    TagDefinition {
        key: "research",
        name: "Research",
        definition: "Pertains to or would affect mental health research (e.g., data collection, consent requirements, ethical guidelines, exemptions for legitimate research use, etc.)",
    },
    TagDefinition {
        key: "consumer_protection",
        name: "Consumer Protection",
        definition: "Provisions concerning fraudulent, manipulative, or deceptive use of MH-AI systems, including in advertising.",
    },
    TagDefinition {
        key: "payments_insurance",
        name: "Payments/Insurance",
        definition: "Regulations on insurance coverage, reimbursement, and payment models.",
    },
    TagDefinition {
        key: "human_in_the_loop",
        name: "Human-in-the-Loop",
        definition: "Explicitly requires a human to monitor, approve, or participate in an essential part of the provision of the MH-AI service.",
    },
    TagDefinition {
        key: "pre_market_review",
        name: "Pre-Market Review",
        definition: "Implements requirements for any level of regulatory review prior to the AI product being offered/implemented (e.g., state commission approval, FDA approval, submission of risk assessments, etc.).",
    },
    TagDefinition {
        key: "post_market_review",
        name: "Post-Market Review",
        definition: "Implements requirements for any level of scheduled/routine review after the AI product has been marketed/implemented (e.g., post-market surveillance, auditing, risk assessments, efficacy reviews, etc.), subject to regulatory oversight.",
    },
    TagDefinition {
        key: "transparency",
        name: "Transparency",
        definition: "Implements requirements involving public or patient rights to access AI system data (e.g., requests to obtain data, public inventories of AI systems, publication or transparency requirements).",
    },
    TagDefinition {
        key: "opt_out",
        name: "Opt Out",
        definition: "Provides for the ability to opt out of AI services in favor of receiving equivalent human-delivered health services.",
    },
    TagDefinition {
        key: "pilot_sandbox",
        name: "Pilot/Sandbox",
        definition: "Provides for regulatory pilot programs or sandbox systems, allowing AI products to be tested and receive feedback from regulators prior to full marketing.",
    },
    TagDefinition {
        key: "malpractice",
        name: "Malpractice/Liability",
        definition: "Pertains to medical malpractice involving AI, including liability allocation for AI-related harm (e.g., standards of evidence, assigning responsibility to deployers, developers, practitioners, or manufacturers, liability shields or limitations, use of MH-AI records and data in litigation, etc.).",
    },
    TagDefinition {
        key: "event_reporting",
        name: "Event Reporting",
        definition: "Creates a system for reporting adverse events, near misses, or other safety events involving MH-AI.",
    },
    TagDefinition {
        key: "vulnerable_populations",
        name: "Vulnerable Populations",
        definition: "Creates any responsibilities related to vulnerable populations (e.g., elderly, children, disabled, foreign-language speakers, etc.), such as mandated reporting requirements, accessibility requirements, or parental controls.",
    },
    TagDefinition {
        key: "meta_biometric_data",
        name: "Meta/Biometric Data",
        definition: "Regulates biometric data, behavioral data, or metadata used by MH-AI systems.",
    },
    TagDefinition {
        key: "special_purpose_entities",
        name: "Special Purpose Entities",
        definition: "Creates or assigns committees, subcommittees, task forces, or similar special-purpose bodies pertaining to MH-AI.",
    },
    TagDefinition {
        key: "safety_standards",
        name: "Safety Standards",
        definition: "Pertains to safety standards for MH-AI (e.g., human overrides, emergency protocols, or prohibitions on high-risk uses) or safety-based exceptions to other requirements (e.g., bypassing procedures when delays risk harm, allowing immediate protective actions).",
    },
];

pub fn find_tag(key: &str) -> Option<&'static TagDefinition> {
    TAG_DEFINITIONS.iter().find(|tag| tag.key == key)
}

pub fn tag_index(key: &str) -> Option<usize> {
    TAG_DEFINITIONS.iter().position(|tag| tag.key == key)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn keys_are_unique_column_identifiers() {
        let mut seen = HashSet::new();
        for tag in TAG_DEFINITIONS.iter() {
            assert!(seen.insert(tag.key), "duplicate tag key {}", tag.key);
            assert!(
                tag.key
                    .chars()
                    .all(|ch| ch.is_ascii_lowercase() || ch == '_'),
                "{} is not a safe column name",
                tag.key
            );
        }
        assert_eq!(seen.len(), TAG_COUNT);
    }

    #[test]
    fn lookups_resolve_known_keys_only() {
        assert_eq!(find_tag("opt_out").map(|tag| tag.name), Some("Opt Out"));
        assert_eq!(tag_index("civil_penalties"), Some(0));
        assert_eq!(tag_index("safety_standards"), Some(TAG_COUNT - 1));
        assert!(find_tag("Opt Out").is_none());
        assert!(find_tag("drop table").is_none());
    }
}
