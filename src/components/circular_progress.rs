//! Circular Progress Component
//!
//! SVG ring whose stroke covers the completion percentage.

use std::f64::consts::PI;

use leptos::prelude::*;

use crate::theme::{ACCENT_PRIMARY, ACCENT_SECONDARY};

const STROKE_WIDTH: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub radius: f64,
    pub circumference: f64,
    pub dash_offset: f64,
}

impl RingGeometry {
    /// `percentage` is clamped to 0..=100
    pub fn new(size: f64, percentage: f64) -> Self {
        let radius = size / 2.0 - STROKE_WIDTH;
        let circumference = 2.0 * PI * radius;
        let fraction = percentage.clamp(0.0, 100.0) / 100.0;
        Self {
            radius,
            circumference,
            dash_offset: circumference - fraction * circumference,
        }
    }
}

#[component]
pub fn CircularProgress(
    #[prop(into)] percentage: Signal<u32>,
    #[prop(optional, into)] label: String,
    #[prop(default = 120.0)] size: f64,
) -> impl IntoView {
    let center = size / 2.0;
    let geometry = Memo::new(move |_| RingGeometry::new(size, percentage.get() as f64));
    let gradient_id = format!("ring-gradient-{}", size as u32);
    let stroke = format!("url(#{})", gradient_id);

    view! {
        <div class="circular-progress" style=format!("width: {}px; height: {}px;", size, size)>
            <svg width=size height=size viewBox=format!("0 0 {} {}", size, size)>
                <defs>
                    <linearGradient id=gradient_id x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" stop-color=ACCENT_PRIMARY />
                        <stop offset="100%" stop-color=ACCENT_SECONDARY />
                    </linearGradient>
                </defs>
                <circle class="ring-track" cx=center cy=center r=move || geometry.get().radius fill="none" stroke-width=STROKE_WIDTH />
                <circle
                    class="ring-value"
                    cx=center
                    cy=center
                    r=move || geometry.get().radius
                    fill="none"
                    stroke=stroke
                    stroke-width=STROKE_WIDTH
                    stroke-linecap="round"
                    stroke-dasharray=move || geometry.get().circumference
                    stroke-dashoffset=move || geometry.get().dash_offset
                    transform=format!("rotate(-90 {} {})", center, center)
                />
            </svg>
            <div class="ring-center">
                <span class="ring-percentage">{move || format!("{}%", percentage.get())}</span>
                {(!label.is_empty()).then(|| view! { <span class="ring-label">{label.clone()}</span> })}
            </div>
        </div>
    }
}
