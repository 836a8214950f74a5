use dioxus::prelude::*;

/// Brand name rendered next to the mark.
pub const BRAND_NAME: &str = "AgriMarket";

/// The AgriMarket brand mark: a sprout rising over ploughed rows, with an
/// optional wordmark. Pure SVG, no stylesheet.
#[component]
pub fn Logo(
    /// Edge length of the square mark, in pixels.
    #[props(default = 40)]
    size: u32,
    #[props(default = true)] show_wordmark: bool,
) -> Element {
    let wordmark_px = size / 2;

    rsx! {
        span {
            class: "agri-logo",
            style: "display: inline-flex; align-items: center; gap: 0.5rem;",
            svg {
                width: "{size}",
                height: "{size}",
                view_box: "0 0 64 64",
                "role": "img",
                "aria-label": BRAND_NAME,
                circle { cx: "32", cy: "32", r: "30", fill: "#f2e6c4" }
                // Furrows
                path {
                    d: "M8 44 Q32 36 56 44 M10 51 Q32 43 54 51",
                    fill: "none",
                    stroke: "#8a5a2b",
                    stroke_width: "3",
                    stroke_linecap: "round",
                }
                // Stem
                path {
                    d: "M32 42 V22",
                    fill: "none",
                    stroke: "#3f7d20",
                    stroke_width: "3.5",
                    stroke_linecap: "round",
                }
                // Leaves
                path { d: "M32 28 C24 28 18 22 18 14 C26 14 32 20 32 28 Z", fill: "#5fa83a" }
                path { d: "M32 24 C40 24 46 18 46 10 C38 10 32 16 32 24 Z", fill: "#3f7d20" }
            }
            if show_wordmark {
                span {
                    class: "agri-logo-wordmark",
                    style: "font-weight: 700; font-size: {wordmark_px}px; color: #1f3d14;",
                    "{BRAND_NAME}"
                }
            }
        }
    }
}
