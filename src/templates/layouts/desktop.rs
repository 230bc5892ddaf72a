use maud::{html, Markup, PreEscaped, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";
const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

// Draws every element carrying a figure, on load and after each htmx swap.
const RENDER_SCRIPT: &str = r#"
function renderCharts(root) {
  root.querySelectorAll('[data-figure]').forEach(function (el) {
    Plotly.react(el, JSON.parse(el.dataset.figure));
  });
}
document.addEventListener('DOMContentLoaded', function () { renderCharts(document); });
document.addEventListener('htmx:afterSwap', function (e) { renderCharts(e.detail.target); });
"#;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1400px; padding: 1rem; }
h1 { text-align: center; }
.filters { display: flex; justify-content: space-between; gap: 4%; }
.filters .filter { width: 48%; }
.filters select { width: 100%; min-height: 8rem; }
.summary-line { color: #444; }
.chart { width: 100%; min-height: 450px; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="vi" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
                script src=(HTMX_SRC) {}
                script src=(PLOTLY_SRC) {}
                script { (PreEscaped(RENDER_SCRIPT)) }
            }
            body {
                (content)
            }
        }
    }
}
