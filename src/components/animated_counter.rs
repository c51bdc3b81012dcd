//! Animated Counter Component
//!
//! Counts from zero up to a target at roughly 60 frames per second.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const FRAME_MS: u32 = 16;

/// Per-frame ramp: floor of the running value while below target, then exactly target
#[derive(Debug, Clone, PartialEq)]
pub struct CounterRamp {
    target: u64,
    increment: f64,
    value: f64,
    displayed: u64,
}

impl CounterRamp {
    pub fn new(target: u64, duration_secs: f64) -> Self {
        let frames = duration_secs * 60.0;
        let increment = if frames > 0.0 { target as f64 / frames } else { target as f64 };
        Self {
            target,
            increment,
            value: 0.0,
            displayed: 0,
        }
    }

    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    /// Advance one frame; returns true while more frames are needed
    pub fn tick(&mut self) -> bool {
        self.value += self.increment;
        if self.value < self.target as f64 {
            self.displayed = self.value.floor() as u64;
            true
        } else {
            self.displayed = self.target;
            false
        }
    }
}

/// `12345` -> `12,345`
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[component]
pub fn AnimatedCounter(
    target: u64,
    #[prop(into)] label: String,
    #[prop(optional, into)] suffix: String,
    #[prop(default = 2.0)] duration: f64,
) -> impl IntoView {
    let (count, set_count) = signal(0u64);
    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.store(false, Ordering::SeqCst)
    });

    spawn_local(async move {
        let mut ramp = CounterRamp::new(target, duration);
        loop {
            TimeoutFuture::new(FRAME_MS).await;
            if !alive.load(Ordering::SeqCst) {
                return;
            }
            let running = ramp.tick();
            set_count.set(ramp.displayed());
            if !running {
                return;
            }
        }
    });

    view! {
        <div class="animated-counter">
            <div class="counter-value">
                <span class="counter-number">{move || format_thousands(count.get())}</span>
                {(!suffix.is_empty()).then(|| view! { <span class="counter-suffix">{suffix.clone()}</span> })}
            </div>
            <div class="counter-label">{label}</div>
        </div>
    }
}
