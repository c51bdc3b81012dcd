//! Pie Chart Component
//!
//! Donut chart drawn from SVG arc paths, with a legend.

use std::f64::consts::PI;

use leptos::prelude::*;

/// One drawn slice
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: u64,
    pub color: &'static str,
    pub shape: SliceShape,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SliceShape {
    /// Arc path data
    Path(String),
    /// A single slice covering the whole chart
    FullCircle,
}

fn point(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    // 0 rad points up, clockwise
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// Zero-valued slices are skipped; an all-zero input yields no slices
pub fn pie_slices(data: &[(&'static str, u64, &'static str)], cx: f64, cy: f64, r: f64) -> Vec<Slice> {
    let total: u64 = data.iter().map(|(_, v, _)| v).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = 0.0_f64;
    let mut slices = Vec::new();
    for &(label, value, color) in data.iter().filter(|(_, v, _)| *v > 0) {
        let sweep = value as f64 / total as f64 * 2.0 * PI;
        let shape = if value == total {
            SliceShape::FullCircle
        } else {
            let (x1, y1) = point(cx, cy, r, start);
            let (x2, y2) = point(cx, cy, r, start + sweep);
            let large_arc = if sweep > PI { 1 } else { 0 };
            SliceShape::Path(format!(
                "M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
            ))
        };
        slices.push(Slice { label, value, color, shape });
        start += sweep;
    }
    slices
}

#[component]
pub fn PieChart(
    #[prop(into)] data: Signal<Vec<(&'static str, u64, &'static str)>>,
    #[prop(default = 200.0)] size: f64,
) -> impl IntoView {
    let center = size / 2.0;
    let radius = size / 2.0 - 4.0;
    let slices = Memo::new(move |_| pie_slices(&data.get(), center, center, radius));

    view! {
        <div class="pie-chart">
            <Show
                when=move || !slices.get().is_empty()
                fallback=|| view! { <p class="pie-empty">"No tasks yet"</p> }
            >
                <svg width=size height=size viewBox=format!("0 0 {} {}", size, size)>
                    <For
                        each=move || slices.get()
                        key=|slice| slice.label
                        children=move |slice| match slice.shape {
                            SliceShape::FullCircle => view! {
                                <circle cx=center cy=center r=radius fill=slice.color />
                            }.into_any(),
                            SliceShape::Path(d) => view! { <path d=d fill=slice.color /> }.into_any(),
                        }
                    />
                    <circle cx=center cy=center r={radius * 0.6} class="pie-hole" />
                </svg>
                <ul class="pie-legend">
                    {move || slices.get().into_iter().map(|slice| view! {
                        <li>
                            <span class="legend-swatch" style=format!("background: {};", slice.color)></span>
                            {format!("{}: {}", slice.label, slice.value)}
                        </li>
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_data_has_no_slices() {
        assert!(pie_slices(&[("Completed", 0, "#a"), ("Remaining", 0, "#b")], 100.0, 100.0, 96.0).is_empty());
    }

    #[test]
    fn test_single_full_slice() {
        let slices = pie_slices(&[("Completed", 4, "#a"), ("Remaining", 0, "#b")], 100.0, 100.0, 96.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].shape, SliceShape::FullCircle);
    }

    #[test]
    fn test_half_and_half_arcs() {
        let slices = pie_slices(&[("Completed", 1, "#a"), ("Remaining", 1, "#b")], 100.0, 100.0, 50.0);
        assert_eq!(
            slices[0].shape,
            SliceShape::Path("M 100.00 100.00 L 100.00 50.00 A 50.00 50.00 0 0 1 100.00 150.00 Z".into())
        );
        assert_eq!(
            slices[1].shape,
            SliceShape::Path("M 100.00 100.00 L 100.00 150.00 A 50.00 50.00 0 0 1 100.00 50.00 Z".into())
        );
    }

    #[test]
    fn test_large_arc_flag() {
        let slices = pie_slices(&[("Completed", 3, "#a"), ("Remaining", 1, "#b")], 0.0, 0.0, 10.0);
        match &slices[0].shape {
            SliceShape::Path(d) => assert!(d.contains(" 0 1 1 ")),
            other => panic!("unexpected {:?}", other),
        }
    }
}
