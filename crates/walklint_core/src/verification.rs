//! Verification blocks and the success/fail pairing scan.

use serde::Serialize;
use walklint_ast::Block;

use crate::{ATTR_TYPE, TYPE_VERIFICATION, TYPE_VERIFICATION_FAIL, TYPE_VERIFICATION_SUCCESS};

/// A check-your-work block, optionally paired with success and fail
/// continuation blocks.
///
/// Verification entities carry no validation rules: a verification with
/// neither continuation is never flagged.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    success_block: Option<VerificationSuccess>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fail_block: Option<VerificationFail>,
}

impl Verification {
    /// True when the block is shape-tagged as a verification.
    pub fn matches<B: Block>(block: &B) -> bool {
        block.attribute(ATTR_TYPE) == Some(TYPE_VERIFICATION)
    }

    /// Builds a verification from its block and the siblings that follow
    /// it, which form the pairing window for the success and fail scans.
    pub fn from_block<B: Block>(block: &B, following: &[B]) -> Self {
        Self {
            html: block.render(),
            success_block: VerificationSuccess::find_following(following),
            fail_block: VerificationFail::find_following(following),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn has_success_block(&self) -> bool {
        self.success_block.is_some()
    }

    pub fn has_fail_block(&self) -> bool {
        self.fail_block.is_some()
    }

    pub fn success_block(&self) -> Option<&VerificationSuccess> {
        self.success_block.as_ref()
    }

    pub fn fail_block(&self) -> Option<&VerificationFail> {
        self.fail_block.as_ref()
    }
}

/// Content shown when a verification succeeds. Never exposed on its own,
/// only through the verification it pairs with.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationSuccess {
    html: String,
}

impl VerificationSuccess {
    pub fn matches<B: Block>(block: &B) -> bool {
        block.attribute(ATTR_TYPE) == Some(TYPE_VERIFICATION_SUCCESS)
    }

    pub fn from_block<B: Block>(block: &B) -> Self {
        Self {
            html: block.render(),
        }
    }

    /// Scans the pairing window for the next success block. The window
    /// closes at the first new verification, so a success belonging to a
    /// later verification is never claimed by an earlier one.
    pub fn find_following<B: Block>(following: &[B]) -> Option<Self> {
        scan_window(following, TYPE_VERIFICATION_SUCCESS).map(Self::from_block)
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

/// Content shown when a verification fails. Counterpart of
/// [`VerificationSuccess`].
#[derive(Debug, Clone, Serialize)]
pub struct VerificationFail {
    html: String,
}

impl VerificationFail {
    pub fn matches<B: Block>(block: &B) -> bool {
        block.attribute(ATTR_TYPE) == Some(TYPE_VERIFICATION_FAIL)
    }

    pub fn from_block<B: Block>(block: &B) -> Self {
        Self {
            html: block.render(),
        }
    }

    /// Scans the pairing window for the next fail block, independently
    /// of the success scan over the same window.
    pub fn find_following<B: Block>(following: &[B]) -> Option<Self> {
        scan_window(following, TYPE_VERIFICATION_FAIL).map(Self::from_block)
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

/// Forward scan over a sibling window: returns the first block tagged
/// `wanted`, or `None` as soon as another verification opens.
fn scan_window<'b, B: Block>(following: &'b [B], wanted: &str) -> Option<&'b B> {
    for block in following {
        if Verification::matches(block) {
            return None;
        }
        if block.attribute(ATTR_TYPE) == Some(wanted) {
            return Some(block);
        }
    }
    None
}
