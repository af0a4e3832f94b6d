//! The example externally loaded strategy.
//!
//! Built as a `cdylib`, this exports the three-symbol ABI the pd-arena
//! loader expects (`create_strategy`, `destroy_strategy`, `strategy_id`).
//! The decision logic is ordinary safe Rust implementing
//! [`pd_arena::Strategy`], so it is unit-testable without any `dlopen`.
use std::ffi::c_char;

use pd_arena::config;
use pd_arena::registry::plugin::StrategyHandle;
use pd_arena::{Move, Strategy};

/// Grim with a temper that cools: cooperate by default; on observing any
/// defection, defect for a cooldown of `punishment` rounds (default 3).
/// A streak of `forgive` consecutive both-cooperate rounds (default 2)
/// resets the cooldown early.
#[derive(Debug, Clone)]
pub struct AdaptiveGrim {
    cooldown: u32,
    forgive_streak: u32,
    punishment: u32,
    forgive: u32,
}

impl Default for AdaptiveGrim {
    fn default() -> Self {
        Self {
            cooldown: 0,
            forgive_streak: 0,
            punishment: 3,
            forgive: 2,
        }
    }
}

impl Strategy for AdaptiveGrim {
    fn identify(&self) -> &str {
        "AdaptiveGrim"
    }

    fn decide(&mut self, _self_history: &[Move], opponent_a: &[Move], opponent_b: &[Move]) -> Move {
        if self.cooldown > 0 {
            return Move::Defect;
        }
        if let (Some(a), Some(b)) = (opponent_a.last(), opponent_b.last()) {
            if a.is_defect() || b.is_defect() {
                self.cooldown = self.punishment;
                return Move::Defect;
            }
        }
        Move::Cooperate
    }

    fn on_round_end(&mut self, _own: Move, opponent_a: Move, opponent_b: Move) {
        if self.cooldown > 0 {
            self.cooldown -= 1;
        }

        if opponent_a == Move::Cooperate && opponent_b == Move::Cooperate {
            self.forgive_streak += 1;
        } else {
            self.forgive_streak = 0;
        }

        if self.forgive_streak >= self.forgive {
            self.cooldown = 0;
            self.forgive_streak = 0;
        }
    }

    fn configure(&mut self, cfg: &str) {
        for (key, value) in config::key_values(cfg) {
            match key {
                "punishment" => {
                    if let Ok(n) = value.parse::<u32>() {
                        self.punishment = n.max(1);
                    }
                }
                "forgive" => {
                    if let Ok(n) = value.parse::<u32>() {
                        self.forgive = n.max(1);
                    }
                }
                _ => {}
            }
        }
    }
}

#[no_mangle]
pub extern "C" fn strategy_id() -> *const c_char {
    c"AdaptiveGrim".as_ptr()
}

#[no_mangle]
pub extern "C" fn create_strategy() -> *mut StrategyHandle {
    Box::into_raw(Box::new(Box::new(AdaptiveGrim::default()) as StrategyHandle))
}

/// # Safety
///
/// `handle` must be a pointer previously returned by [`create_strategy`]
/// and not yet destroyed.
#[no_mangle]
pub unsafe extern "C" fn destroy_strategy(handle: *mut StrategyHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}
