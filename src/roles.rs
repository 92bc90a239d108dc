// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Built-in job roles and their keyword rubrics.
//!
//! These are the sample profiles a fresh deployment starts with. Real
//! deployments keep their own profiles in a store and pass a
//! [`KeywordProfile`] in directly; the catalog exists so the engine is usable
//! (and testable) without one.

use crate::error::RankError;
use crate::types::KeywordProfile;

/// A named role with a static keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleProfile {
    pub name: &'static str,
    pub keywords: &'static [(&'static str, u32)],
}

impl RoleProfile {
    /// The role's rubric as a validated profile.
    pub fn profile(&self) -> Result<KeywordProfile, RankError> {
        KeywordProfile::new(self.keywords.iter().map(|&(k, w)| (k, i64::from(w))))
    }
}

/// The five sample roles, in catalog order.
pub const BUILTIN_ROLES: &[RoleProfile] = &[
    RoleProfile {
        name: "Data Scientist",
        keywords: &[
            ("python", 5),
            ("machine learning", 4),
            ("sql", 3),
            ("statistics", 2),
            ("data analysis", 3),
            ("pandas", 2),
            ("tensorflow", 2),
            ("deep learning", 3),
        ],
    },
    RoleProfile {
        name: "Web Developer",
        keywords: &[
            ("javascript", 5),
            ("html", 4),
            ("css", 3),
            ("react", 2),
            ("node.js", 3),
            ("angular", 2),
            ("typescript", 2),
            ("bootstrap", 1),
        ],
    },
    RoleProfile {
        name: "Project Manager",
        keywords: &[
            ("management", 5),
            ("communication", 4),
            ("agile", 3),
            ("leadership", 2),
            ("scrum", 3),
            ("planning", 2),
            ("teamwork", 2),
            ("budgeting", 1),
        ],
    },
    RoleProfile {
        name: "Software Engineer",
        keywords: &[
            ("java", 5),
            ("c++", 4),
            ("python", 3),
            ("git", 2),
            ("algorithms", 3),
            ("data structures", 3),
            ("oop", 2),
            ("testing", 1),
        ],
    },
    RoleProfile {
        name: "DevOps Engineer",
        keywords: &[
            ("docker", 5),
            ("aws", 4),
            ("linux", 3),
            ("ci/cd", 3),
            ("kubernetes", 3),
            ("jenkins", 2),
            ("terraform", 2),
            ("bash", 1),
        ],
    },
];

/// Look up a built-in role by name, ignoring case and surrounding whitespace.
pub fn find_role(name: &str) -> Option<&'static RoleProfile> {
    let wanted = name.trim();
    BUILTIN_ROLES
        .iter()
        .find(|role| role.name.eq_ignore_ascii_case(wanted))
}
