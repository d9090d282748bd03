use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TaxonomyCode {
    E,
    SR,
    II,
    CB,
    NR,
}

#[derive(Debug, Error)]
#[error("unknown taxonomy code `{0}`")]
pub struct UnknownTaxonomyCode(pub String);

impl TaxonomyCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E => "E",
            Self::SR => "SR",
            Self::II => "II",
            Self::CB => "CB",
            Self::NR => "NR",
        }
    }
}

impl fmt::Display for TaxonomyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxonomyCode {
    type Err = UnknownTaxonomyCode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "E" => Ok(Self::E),
            "SR" => Ok(Self::SR),
            "II" => Ok(Self::II),
            "CB" => Ok(Self::CB),
            "NR" => Ok(Self::NR),
            other => Err(UnknownTaxonomyCode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxonomyDefinition {
    pub code: TaxonomyCode,
    pub name: &'static str,
    pub definition: &'static str,
    pub inclusion: &'static str,
}

pub static TAXONOMY_DEFINITIONS: [TaxonomyDefinition; 5] = [
    TaxonomyDefinition {
        code: TaxonomyCode::E,
        name: "Explicit",
        definition: "Bills that explicitly reference mental health, behavioral health, psychotherapy, or related services in the context of AI development, regulation, or application.",
        inclusion: "The bill directly names mental health uses of AI, specific clinical applications, or mental health contexts as targets of regulation, policy, or oversight.",
    },
    TaxonomyDefinition {
        code: TaxonomyCode::SR,
        name: "Substantively Relevant",
        definition: "Bills that govern MH-AI in ways that have direct, foreseeable implications for mental health services or stakeholders, even if mental health is not explicitly or substantively discussed in the bill's text.",
        inclusion: "The bill regulates MH-AI in a way that predictably impacts mental health uses, delivery, or providers, regardless of whether mental health is explicitly mentioned.",
    },
    TaxonomyDefinition {
        code: TaxonomyCode::II,
        name: "Incidentally Implicative",
        definition: "Bills that are broadly written and might include MH-AI, but only in a general or indirect way. Clinical impact is uncertain or minimal.",
        inclusion: "MH-AI falls or could fall under the bill's scope, but direct mechanisms or practical effects at the clinical level are not apparent or minimal.",
    },
    TaxonomyDefinition {
        code: TaxonomyCode::CB,
        name: "Companion Bill",
        definition: "Bills that are companion legislation to other bills in the dataset.",
        inclusion: "The bill is a companion to another bill, typically in a different chamber of the legislature.",
    },
    TaxonomyDefinition {
        code: TaxonomyCode::NR,
        name: "Not Relevant",
        definition: "Bills with no meaningful relationship to MH-AI services, even under expansive interpretations.",
        inclusion: "The bill does not touch on mental health services.",
    },
];
