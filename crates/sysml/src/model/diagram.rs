//! Diagram kinds a model can eventually be rendered as

use std::fmt;

/// SysML diagram entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    /// Block definition diagram: system hierarchy and classifications
    Bdd,
    /// Package diagram: model organization
    Pkg,
    /// Use case diagram: functionality achieved through interaction
    Uc,
    /// Requirement diagram: requirement hierarchies and derivation
    Req,
}

impl DiagramKind {
    pub const ALL: [DiagramKind; 4] = [
        DiagramKind::Bdd,
        DiagramKind::Pkg,
        DiagramKind::Uc,
        DiagramKind::Req,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DiagramKind::Bdd => "bdd",
            DiagramKind::Pkg => "pkg",
            DiagramKind::Uc => "uc",
            DiagramKind::Req => "req",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DiagramKind::Bdd => "Block definition diagram",
            DiagramKind::Pkg => "Package diagram",
            DiagramKind::Uc => "Use case diagram",
            DiagramKind::Req => "Requirement diagram",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
