//! Render-agnostic presentation layer
//!
//! Translates controller state into a drawable snapshot and controller
//! events into player-facing messages. The host owns widgets, dialogs and
//! fonts; this layer owns what to show and say. It is also the validation
//! boundary for raw pointer input: only finite coordinates become clicks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::bubble::Color;
use crate::sim::geometry::ZoneBox;
use crate::sim::round::{Event, Input, LossReason, RoundController};
use crate::sim::state::{FieldSize, Phase};

/// One drawable bubble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleView {
    pub id: u32,
    /// Where to draw it right now
    pub position: Vec2,
    pub color: Color,
    /// Its influence box, for debug or hint overlays
    pub zone_box: ZoneBox,
    pub burst: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current round, 1-based
    pub round: u32,
    pub rounds_total: u32,
    pub phase: Phase,
    /// Seconds on the clock, present only while hiding
    pub seconds_left: Option<u32>,
    /// Bubbles in insertion order
    pub bubbles: Vec<BubbleView>,
}

/// Build a snapshot of the running game, if one was started
pub fn snapshot(ctrl: &RoundController) -> Option<Snapshot> {
    let game = ctrl.game()?;
    Some(Snapshot {
        round: game.round,
        rounds_total: ctrl.tuning().rounds,
        phase: game.phase,
        seconds_left: game.countdown,
        bubbles: game
            .bubbles
            .iter()
            .map(|b| BubbleView {
                id: b.id,
                position: b.origin,
                color: b.color,
                zone_box: b.zone_box(),
                burst: b.burst,
            })
            .collect(),
    })
}

/// What kind of message a notice is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Info,
    Rejection,
    Loss,
    Win,
}

/// A player-facing dialog message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Map a batch of events to the dialog messages the host should show.
/// Screen changes and bursts are silent; everything else keeps the game's
/// original wording.
pub fn notices_for(events: &[Event]) -> Vec<Notice> {
    events.iter().filter_map(notice_for).collect()
}

fn notice_for(event: &Event) -> Option<Notice> {
    let notice = match event {
        Event::PlacementRejected { .. } => Notice {
            kind: NoticeKind::Rejection,
            text: "Oops! Bubble overlap detected, please choose another location.".to_string(),
        },
        Event::RoundStarted { round, .. } => Notice {
            kind: NoticeKind::Info,
            text: format!("Round {round} begins! show your Madness on bubbles."),
        },
        Event::RoundLost {
            reason: LossReason::Timeout,
        } => Notice {
            kind: NoticeKind::Loss,
            text: "You Lost Buddy ! Game over.".to_string(),
        },
        Event::RoundLost {
            reason: LossReason::WrongClick,
        } => Notice {
            kind: NoticeKind::Loss,
            text: "Done Wrong Buddy Sorry. Game over.".to_string(),
        },
        Event::GameWon => Notice {
            kind: NoticeKind::Win,
            text: "Game Over! Your a Champion Buddy".to_string(),
        },
        Event::ScreenChanged(_) | Event::BubbleBurst { .. } => return None,
    };
    Some(notice)
}

/// Turn raw pointer coordinates into a click message, or nothing when the
/// host hands us garbage (NaN and infinities never reach the controller)
pub fn sanitize_click(x: f32, y: f32, field: FieldSize) -> Option<Input> {
    if !x.is_finite() || !y.is_finite() {
        log::warn!("dropped click with non-finite coordinates");
        return None;
    }
    if !field.width.is_finite()
        || !field.height.is_finite()
        || field.width <= 0.0
        || field.height <= 0.0
    {
        log::warn!("dropped click with unusable field size");
        return None;
    }
    Some(Input::Click {
        point: Vec2::new(x, y),
        field,
    })
}
