//! Bubble Hunt demo driver
//!
//! Headless scripted player over the real message queue: places bubbles
//! through the validator (including a couple of doomed attempts), then hunts
//! them from presenter snapshots while a simulated clock feeds the two
//! timers. Rendering hosts drive the controller the same way; this binary
//! exists to watch a full game from the command line.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glam::Vec2;

use bubble_hunt::presenter::{self, Snapshot};
use bubble_hunt::sim::round::{Input, RoundController};
use bubble_hunt::sim::state::{FieldSize, Level, Phase};
use bubble_hunt::tuning::Tuning;

#[derive(Parser)]
#[command(name = "bubble-hunt")]
#[command(about = "Scripted playthrough of the bubble hunt game core")]
struct Args {
    /// Difficulty: easy, medium or hard
    #[arg(long, default_value = "easy")]
    level: String,
    /// RNG seed for a reproducible run
    #[arg(long, default_value_t = 2024)]
    seed: u64,
    /// Tuning overrides (JSON file)
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Lose on purpose with a wild click once the bubbles hide
    #[arg(long)]
    fumble: bool,
    /// Stop clicking once the bubbles hide and let the clock run out
    #[arg(long)]
    stall: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let Some(level) = Level::from_str(&args.level) else {
        eprintln!("unknown level {:?} (expected easy, medium or hard)", args.level);
        return ExitCode::FAILURE;
    };
    let tuning = match &args.tuning {
        Some(path) => match Tuning::load(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };

    let mut driver = Driver::new(level, tuning, args.seed, args.fumble, args.stall);
    driver.run();
    driver.print_summary(level, args.seed);
    ExitCode::SUCCESS
}

/// Feeds the controller from one serialized queue: player actions compete
/// with the two timers on a simulated millisecond clock, and whichever is
/// due first goes in next
struct Driver {
    ctrl: RoundController,
    queue: VecDeque<Input>,
    field: FieldSize,
    clock_ms: u64,
    next_reposition: u64,
    next_countdown: u64,
    probes: VecDeque<Vec2>,
    fumble: bool,
    stall: bool,
    acted_hidden: bool,
}

/// Simulated delay before a placement click
const PLACE_THINK_MS: u64 = 250;
/// Simulated delay before a hunt click
const HUNT_THINK_MS: u64 = 400;

impl Driver {
    fn new(level: Level, tuning: Tuning, seed: u64, fumble: bool, stall: bool) -> Self {
        let field = FieldSize::default();
        let probes = placement_probes(&tuning, field);
        let next_reposition = tuning.reposition_period_ms;
        let next_countdown = tuning.countdown_period_ms;
        let mut queue = VecDeque::new();
        queue.push_back(Input::Start { level, field });
        Self {
            ctrl: RoundController::with_tuning(tuning, seed),
            queue,
            field,
            clock_ms: 0,
            next_reposition,
            next_countdown,
            probes,
            fumble,
            stall,
            acted_hidden: false,
        }
    }

    fn run(&mut self) {
        loop {
            let Some(input) = self.queue.pop_front() else {
                self.decide();
                if self.queue.is_empty() {
                    break;
                }
                continue;
            };
            let events = self.ctrl.handle(input);
            for notice in presenter::notices_for(&events) {
                log::info!("[{:?}] {}", notice.kind, notice.text);
            }
            if self
                .ctrl
                .game()
                .is_some_and(|g| matches!(g.phase, Phase::Won | Phase::Lost))
            {
                break;
            }
        }
    }

    /// Queue exactly one message: whichever timer fires before the player
    /// would act, or the player's action itself
    fn decide(&mut self) {
        let Some(snap) = presenter::snapshot(&self.ctrl) else {
            return;
        };
        let think_deadline = match snap.phase {
            Phase::Placing => self.clock_ms + PLACE_THINK_MS,
            Phase::Hiding if !self.stall => self.clock_ms + HUNT_THINK_MS,
            _ => u64::MAX,
        };

        let next_timer = self.next_reposition.min(self.next_countdown);
        if next_timer <= think_deadline {
            self.clock_ms = next_timer;
            if self.next_reposition <= self.next_countdown {
                self.queue.push_back(Input::RepositionTick);
                self.next_reposition += self.ctrl.tuning().reposition_period_ms;
            } else {
                self.queue.push_back(Input::CountdownTick);
                self.next_countdown += self.ctrl.tuning().countdown_period_ms;
            }
            return;
        }

        self.clock_ms = think_deadline;
        match snap.phase {
            Phase::Placing => self.queue_placement_click(),
            Phase::Hiding => self.queue_hunt_click(&snap),
            _ => {}
        }
    }

    fn queue_placement_click(&mut self) {
        let Some(p) = self.probes.pop_front() else {
            log::warn!("out of placement probes, giving up");
            return;
        };
        if let Some(input) = presenter::sanitize_click(p.x, p.y, self.field) {
            self.queue.push_back(input);
        }
    }

    fn queue_hunt_click(&mut self, snap: &Snapshot) {
        if self.fumble && !self.acted_hidden {
            self.acted_hidden = true;
            if let Some(miss) = self.wild_miss_point(snap) {
                log::info!("fumbling on purpose at ({:.0},{:.0})", miss.x, miss.y);
                if let Some(input) = presenter::sanitize_click(miss.x, miss.y, self.field) {
                    self.queue.push_back(input);
                }
                return;
            }
            log::warn!("no safe fumble spot, hunting normally");
        }
        let Some(target) = snap.bubbles.first().map(|b| b.position) else {
            return;
        };
        if let Some(input) = presenter::sanitize_click(target.x, target.y, self.field) {
            self.queue.push_back(input);
        }
    }

    /// A corner click that misses every bubble and every zone, if one exists
    fn wild_miss_point(&self, snap: &Snapshot) -> Option<Vec2> {
        let r = self.ctrl.tuning().bubble_radius;
        [
            Vec2::new(self.field.width - 2.0, self.field.height - 2.0),
            Vec2::new(2.0, self.field.height - 2.0),
            Vec2::new(self.field.width - 2.0, 2.0),
            Vec2::new(2.0, 2.0),
        ]
        .into_iter()
        .find(|p| {
            snap.bubbles
                .iter()
                .all(|b| !b.zone_box.contains(*p) && p.distance(b.position) > r)
        })
    }

    fn print_summary(&self, level: Level, seed: u64) {
        println!();
        println!("=== RUN SUMMARY ===");
        println!("  Level:   {} ({} bubbles)", level.as_str(), level.bubble_count());
        println!("  Seed:    {seed}");
        match presenter::snapshot(&self.ctrl) {
            Some(snap) => {
                println!("  Round:   {} of {}", snap.round, snap.rounds_total);
                println!("  Result:  {:?}", snap.phase);
            }
            None => println!("  Result:  never started"),
        }
        println!("  Clock:   {:.1}s simulated", self.clock_ms as f64 / 1000.0);
    }
}

/// Round-1 placement plan: a lattice that clears the spacing rules, with a
/// couple of doomed probes up front to show rejections off
fn placement_probes(tuning: &Tuning, field: FieldSize) -> VecDeque<Vec2> {
    let r = tuning.bubble_radius;
    let zone = tuning.zone_size_for_round(1) as f32;
    let step = zone + 2.0;

    let mut probes = VecDeque::new();
    // Off the margin: rejected out of bounds
    probes.push_back(Vec2::new(1.0, 1.0));

    let mut y = r + 1.0;
    while y <= field.height - r {
        let mut x = r + 1.0;
        while x <= field.width - r {
            probes.push_back(Vec2::new(x, y));
            x += step;
        }
        y += step;
    }
    // Inside the first zone: rejected for overlap
    if probes.len() > 2 {
        let inside = probes[1] + Vec2::new(zone / 2.0 - 1.0, 0.0);
        probes.insert(2, inside);
    }
    probes
}
