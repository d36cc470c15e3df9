//! Skill root configuration.
//!
//! Skill roots come from two comma-separated, environment-style lists:
//! `GLOBAL_SKILLS_PATH` (default `~/.skills/`) and `PROJECT_SKILLS_PATH`
//! (default `.skills/`). Entries may use `~` for the home directory and may be
//! relative to the current working directory.

pub mod error;
pub mod paths;

pub use {
    error::{Error, Result},
    paths::{
        DEFAULT_GLOBAL_SKILLS_PATH, DEFAULT_PROJECT_SKILLS_PATH, GLOBAL_SKILLS_PATH_ENV,
        PROJECT_SKILLS_PATH_ENV, SkillsPaths, parse_skills_paths,
    },
};
