use serde::{Deserialize, Serialize};

/// Position of a node relative to its parent in a tree dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchLabel {
    Root,
    Left,
    Right,
}

impl BranchLabel {
    /// Line prefix used by the text tree renderers
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Root => "Root: ",
            Self::Left => "L--- ",
            Self::Right => "R--- ",
        }
    }
}

impl std::fmt::Display for BranchLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Root => write!(f, "root"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Which sequence a screening result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Reference,
    /// 1-based candidate index
    Candidate(usize),
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reference => write!(f, "REF SEQUENCE"),
            Self::Candidate(index) => write!(f, "SEQ {index}"),
        }
    }
}
