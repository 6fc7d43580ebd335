// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{window, Subscription};

/// Redraws on every display frame while tweens are in flight, and stays
/// silent otherwise so an idle picker costs nothing.
pub fn create_frame_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        window::frames().map(Message::Tick)
    } else {
        Subscription::none()
    }
}
