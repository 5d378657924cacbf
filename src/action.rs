//! Named entry points for a host's command dispatch

use crate::comment::{CommentSynthesizer, ContinuationKind};
use crate::controller::{continue_comment, write_comment, CommentPlacement};
use crate::error::{Error, Result};
use crate::surface::TextSurface;
use std::str::FromStr;

/// A host command this crate answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// `jsdoc:block`: synthesize a comment at the cursor
    WriteComment,
    /// `editor:newline`: continue a comment after a newline
    ContinueComment,
}

/// What an action did to the surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Written(CommentPlacement),
    Continued(ContinuationKind),
}

impl Action {
    pub const ALL: [Action; 2] = [Action::WriteComment, Action::ContinueComment];

    pub fn name(self) -> &'static str {
        match self {
            Action::WriteComment => "jsdoc:block",
            Action::ContinueComment => "editor:newline",
        }
    }

    /// Run the action against `surface`
    pub fn dispatch<S: TextSurface + ?Sized>(
        self,
        surface: &mut S,
        synthesizer: &CommentSynthesizer,
    ) -> ActionOutcome {
        log::trace!("dispatching {}", self.name());
        match self {
            Action::WriteComment => ActionOutcome::Written(write_comment(surface, synthesizer)),
            Action::ContinueComment => {
                ActionOutcome::Continued(continue_comment(surface, synthesizer.style()))
            }
        }
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Action::ALL
            .into_iter()
            .find(|action| action.name() == name)
            .ok_or_else(|| Error::UnknownAction {
                name: name.to_string(),
            })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
