//! Round state machine
//!
//! The controller owns the game state and is its only mutation path. Clicks
//! and timer ticks arrive as [`Input`] messages, are handled one at a time to
//! completion, and come back as [`Event`]s for the presentation layer. Timer
//! messages carry no payload; whether they mean anything is decided here by
//! phase, so a stale tick that raced a transition is simply ignored.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::RESPAWN_RETRY_CAP;
use crate::sim::bubble::{Bubble, Color};
use crate::sim::geometry::{point_in_bubble, point_in_zone_box, point_near_zone_center};
use crate::sim::placement::{self, RejectReason, Verdict};
use crate::sim::reposition::reposition_all;
use crate::sim::state::{FieldSize, GameState, Level, Phase};
use crate::tuning::Tuning;

/// One message from the outside world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Input {
    /// Begin a fresh game at the chosen difficulty
    Start { level: Level, field: FieldSize },
    /// Same as `Start`; kept as its own entry point for the restart button
    Restart { level: Level, field: FieldSize },
    /// A click on the playfield
    Click { point: Vec2, field: FieldSize },
    /// The relocation timer fired
    RepositionTick,
    /// The countdown timer fired
    CountdownTick,
}

/// Which top-level screen the host should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Start,
    Game,
}

/// How a game was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    /// The countdown hit zero
    Timeout,
    /// A click missed every bubble and every influence zone
    WrongClick,
}

/// What happened while handling one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Host should switch top-level screens
    ScreenChanged(Screen),
    /// A placement was refused; nothing changed
    PlacementRejected { reason: RejectReason },
    /// All bubbles are down and the hunt is on
    RoundStarted { round: u32, seconds: u32 },
    /// A hidden bubble was clicked away; `remaining` counts what is left
    BubbleBurst { id: u32, remaining: usize },
    /// Terminal loss
    RoundLost { reason: LossReason },
    /// Terminal win after the last round
    GameWon,
}

/// Owns the game and processes every input serially
#[derive(Debug, Clone)]
pub struct RoundController {
    tuning: Tuning,
    rng: Pcg32,
    seed: u64,
    game: Option<GameState>,
}

impl RoundController {
    /// Controller with default balance and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), seed)
    }

    pub fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        Self {
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            game: None,
        }
    }

    /// The running game, if one was started
    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Seed for reproducing this run
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Process one input to completion. The only mutation path.
    pub fn handle(&mut self, input: Input) -> Vec<Event> {
        let mut events = Vec::new();
        match input {
            Input::Start { level, field } | Input::Restart { level, field } => {
                self.start(level, field, &mut events);
            }
            Input::Click { point, field } => self.click(point, field, &mut events),
            Input::RepositionTick => self.reposition_tick(),
            Input::CountdownTick => self.countdown_tick(&mut events),
        }
        events
    }

    /// Start and Restart share this: any previous game is dropped whole
    fn start(&mut self, level: Level, field: FieldSize, events: &mut Vec<Event>) {
        log::info!(
            "new game: {} ({} bubbles), field {}x{}",
            level.as_str(),
            level.bubble_count(),
            field.width,
            field.height
        );
        self.game = Some(GameState::new(level, field));
        events.push(Event::ScreenChanged(Screen::Game));
    }

    fn click(&mut self, point: Vec2, field: FieldSize, events: &mut Vec<Event>) {
        let phase = match self.game.as_mut() {
            Some(game) => {
                game.field = field;
                game.phase
            }
            None => {
                log::debug!("click ignored: no game running");
                return;
            }
        };
        match phase {
            Phase::Placing => self.place(point, events),
            Phase::Hiding => self.hunt(point, events),
            _ => log::debug!("click ignored in {phase:?}"),
        }
    }

    /// One placement attempt during the placing phase
    fn place(&mut self, point: Vec2, events: &mut Vec<Event>) {
        let tuning = &self.tuning;
        let Some(game) = self.game.as_mut() else {
            return;
        };
        let zone_size = tuning.zone_size_for_round(game.round);
        match placement::validate(
            point,
            zone_size,
            &game.bubbles,
            game.field,
            tuning.bubble_radius,
        ) {
            Verdict::Rejected(reason) => {
                log::debug!(
                    "placement rejected at ({:.0},{:.0}): {reason:?}",
                    point.x,
                    point.y
                );
                events.push(Event::PlacementRejected { reason });
            }
            Verdict::Accepted => {
                let id = game.next_entity_id();
                let color = Color::random(&mut self.rng);
                game.bubbles.push(Bubble::new(id, point, zone_size, color));
                if game.bubbles.len() == game.level.bubble_count() {
                    let seconds = tuning.time_for_round(game.round);
                    game.countdown = Some(seconds);
                    game.phase = Phase::Hiding;
                    log::info!("round {} begins, {seconds}s on the clock", game.round);
                    events.push(Event::RoundStarted {
                        round: game.round,
                        seconds,
                    });
                }
            }
        }
    }

    /// One click during the hiding phase: burst, free miss, or game over
    fn hunt(&mut self, point: Vec2, events: &mut Vec<Event>) {
        let tuning = &self.tuning;
        let Some(game) = self.game.as_mut() else {
            return;
        };
        let radius = tuning.bubble_radius;

        // Every bubble under the click bursts; roaming circles can stack
        let burst: Vec<u32> = game
            .bubbles
            .iter()
            .filter(|b| point_in_bubble(b, point, radius))
            .map(|b| b.id)
            .collect();
        if !burst.is_empty() {
            game.bubbles.retain(|b| !burst.contains(&b.id));
            let remaining = game.bubbles.len();
            for id in burst {
                events.push(Event::BubbleBurst { id, remaining });
            }
            if game.bubbles.is_empty() {
                if game.round < tuning.rounds {
                    respawn_round(game, tuning, &mut self.rng, events);
                } else {
                    game.countdown = None;
                    game.phase = Phase::Won;
                    log::info!("all {} rounds cleared", tuning.rounds);
                    events.push(Event::GameWon);
                    events.push(Event::ScreenChanged(Screen::Start));
                }
            }
            return;
        }

        // A miss inside any influence box costs nothing
        if game.bubbles.iter().any(|b| point_in_zone_box(b, point)) {
            log::debug!("near miss at ({:.0},{:.0})", point.x, point.y);
            return;
        }

        game.countdown = None;
        game.phase = Phase::Lost;
        log::info!(
            "wrong click at ({:.0},{:.0}) in round {}",
            point.x,
            point.y,
            game.round
        );
        events.push(Event::RoundLost {
            reason: LossReason::WrongClick,
        });
        events.push(Event::ScreenChanged(Screen::Start));
    }

    fn reposition_tick(&mut self) {
        let tuning = &self.tuning;
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if game.phase != Phase::Hiding {
            log::trace!("reposition tick ignored in {:?}", game.phase);
            return;
        }
        reposition_all(
            &mut game.bubbles,
            game.field,
            tuning.bubble_radius,
            &mut self.rng,
        );
    }

    fn countdown_tick(&mut self, events: &mut Vec<Event>) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if game.phase != Phase::Hiding {
            log::trace!("countdown tick ignored in {:?}", game.phase);
            return;
        }
        let Some(seconds) = game.countdown else {
            return;
        };
        let left = seconds.saturating_sub(1);
        if left == 0 {
            game.countdown = None;
            game.phase = Phase::Lost;
            log::info!("time expired in round {}", game.round);
            events.push(Event::RoundLost {
                reason: LossReason::Timeout,
            });
            events.push(Event::ScreenChanged(Screen::Start));
        } else {
            game.countdown = Some(left);
        }
    }
}

/// Clear the field and auto-place the next round's bubbles
fn respawn_round(
    game: &mut GameState,
    tuning: &Tuning,
    rng: &mut Pcg32,
    events: &mut Vec<Event>,
) {
    game.phase = Phase::RoundTransition;
    game.round += 1;
    game.bubbles.clear();
    let zone_size = tuning.zone_size_for_round(game.round);
    for _ in 0..game.level.bubble_count() {
        let point = sample_spawn_point(&game.bubbles, game.field, tuning, rng);
        let id = game.next_entity_id();
        let color = Color::random(rng);
        game.bubbles.push(Bubble::new(id, point, zone_size, color));
    }
    let seconds = tuning.time_for_round(game.round);
    game.countdown = Some(seconds);
    game.phase = Phase::Hiding;
    log::info!(
        "round {} begins: {} bubbles, zone {zone_size}, {seconds}s on the clock",
        game.round,
        game.bubbles.len()
    );
    events.push(Event::RoundStarted {
        round: game.round,
        seconds,
    });
}

/// Sample a spawn point inside the field margins, retrying away from
/// existing zone centers. Bounded so crowded or tiny fields still finish;
/// after the cap the last sample stands.
fn sample_spawn_point(
    existing: &[Bubble],
    field: FieldSize,
    tuning: &Tuning,
    rng: &mut Pcg32,
) -> Vec2 {
    let margin = tuning.respawn_margin;
    let max_x = (field.width - margin).max(margin + 1.0);
    let max_y = (field.height - margin).max(margin + 1.0);

    let mut point = Vec2::new(
        rng.random_range(margin..max_x),
        rng.random_range(margin..max_y),
    );
    let mut guard = 0;
    while existing
        .iter()
        .any(|b| point_near_zone_center(b, point, tuning.respawn_spacing))
        && guard < RESPAWN_RETRY_CAP
    {
        point = Vec2::new(
            rng.random_range(margin..max_x),
            rng.random_range(margin..max_y),
        );
        guard += 1;
    }
    point
}
