// SPDX-License-Identifier: MPL-2.0
//! View layer: design tokens, the toast card widget, and the overlay that
//! stacks cards per screen position.

pub mod design_tokens;
pub mod overlay;
pub mod toast_card;

pub use overlay::State as OverlayState;
pub use toast_card::ToastCard;
