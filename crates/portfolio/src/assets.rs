//! Stylesheet and client script served under `/assets/`.
//!
//! The script owns everything that has to happen in the browser: the one-shot
//! viewport reveal, swapping deferred placeholders for their fragments, category
//! tabs, and the canvas widgets. Without it the server-rendered page is complete
//! and fully visible.

pub const STYLESHEET_PATH: &str = "/assets/site.css";
pub const SCRIPT_PATH: &str = "/assets/site.js";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub name: &'static str,
    pub body: &'static str,
}

const ASSETS: [Asset; 2] = [
    Asset {
        name: "site.css",
        body: SITE_CSS,
    },
    Asset {
        name: "site.js",
        body: SITE_JS,
    },
];

pub fn all() -> &'static [Asset] {
    &ASSETS
}

pub fn find(name: &str) -> Option<Asset> {
    ASSETS.iter().copied().find(|asset| asset.name == name)
}

pub const SITE_CSS: &str = r#":root {
  --bg: #05060a;
  --fg: #e6e8ef;
  --muted: #8b90a0;
  --accent: #6366f1;
  --accent-2: #22d3ee;
  --card: rgba(255, 255, 255, 0.04);
  --border: rgba(255, 255, 255, 0.08);
}
* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: var(--fg); font-family: system-ui, sans-serif; line-height: 1.6; }
a { color: inherit; }
main { max-width: 1120px; margin: 0 auto; padding: 0 24px; }
.site-nav { position: sticky; top: 0; z-index: 10; backdrop-filter: blur(12px); border-bottom: 1px solid var(--border); }
.site-nav ul { display: flex; gap: 20px; justify-content: center; list-style: none; margin: 0; padding: 14px; }
.site-nav a { text-decoration: none; color: var(--muted); }
.site-nav a:hover { color: var(--fg); }
.section { padding: 96px 0; }
.section-header { display: flex; flex-wrap: wrap; gap: 24px; justify-content: space-between; align-items: end; margin-bottom: 40px; }
.section-header.centered { justify-content: center; text-align: center; }
.gradient-text { background: linear-gradient(90deg, var(--accent), var(--accent-2)); -webkit-background-clip: text; color: transparent; }
.eyebrow { text-transform: uppercase; letter-spacing: 0.2em; font-size: 0.75rem; color: var(--accent-2); }
.card { background: var(--card); border: 1px solid var(--border); border-radius: 16px; padding: 24px; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 24px; }
.button { display: inline-block; padding: 12px 22px; border-radius: 999px; text-decoration: none; border: 1px solid var(--border); }
.button.primary { background: var(--fg); color: var(--bg); }
.hero { display: grid; grid-template-columns: 1fr 1fr; gap: 32px; min-height: 80vh; align-items: center; }
.hero-visual canvas, .split-visual canvas { width: 100%; height: 420px; }
.metrics { display: flex; gap: 32px; }
.metrics dt { font-size: 1.8rem; font-weight: 700; }
.metrics dd { margin: 0; color: var(--muted); }
.avatar { position: relative; width: 192px; height: 192px; margin: 0; border-radius: 50%; overflow: hidden; background: var(--card); }
.avatar img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
.avatar-initials { display: grid; place-items: center; width: 100%; height: 100%; font-size: 3rem; font-weight: 700; }
.about { display: flex; gap: 48px; align-items: center; }
.filter-tabs { display: flex; gap: 8px; flex-wrap: wrap; }
.tab { background: transparent; color: var(--muted); border: 1px solid var(--border); border-radius: 999px; padding: 6px 14px; cursor: pointer; }
.tab.active { background: var(--fg); color: var(--bg); }
.tags { display: flex; gap: 8px; flex-wrap: wrap; list-style: none; padding: 0; }
.tags li { font-size: 0.75rem; border: 1px solid var(--border); border-radius: 6px; padding: 2px 8px; }
.badge { font-size: 0.7rem; text-transform: uppercase; border-radius: 6px; padding: 2px 8px; border: 1px solid var(--border); }
.badge.verified { color: #34d399; }
.badge.planned { color: #fbbf24; }
.split { display: grid; grid-template-columns: 1fr 1fr; gap: 32px; }
.stack { display: grid; gap: 16px; }
.bento { display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 24px; }
.publications { list-style: none; padding: 0; display: grid; gap: 12px; }
.publication { display: flex; justify-content: space-between; gap: 16px; border-bottom: 1px solid var(--border); padding: 12px 0; }
.placeholder { display: grid; place-items: center; border: 1px dashed var(--border); border-radius: 16px; }
.spinner { width: 28px; height: 28px; border-radius: 50%; border: 3px solid var(--border); border-top-color: var(--accent); animation: spin 1s linear infinite; }
[hidden] { display: none !important; }
.empty { color: var(--muted); text-align: center; padding: 48px 0; }
.site-footer { text-align: center; color: var(--muted); padding: 48px 0; border-top: 1px solid var(--border); }
.visually-hidden { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0 0 0 0); }
@keyframes spin { to { transform: rotate(360deg); } }
html.js-reveal [data-reveal="unseen"] { opacity: 0; transform: translateY(50px); }
html.js-reveal [data-reveal="revealing"], html.js-reveal [data-reveal="revealed"] { opacity: 1; transform: none; transition: opacity var(--reveal-duration, 800ms) ease-out, transform var(--reveal-duration, 800ms) ease-out; }
@media (prefers-reduced-motion: reduce) { html.js-reveal [data-reveal] { opacity: 1; transform: none; transition: none; } }
@media (max-width: 800px) { .hero, .split, .bento { grid-template-columns: 1fr; } .about { flex-direction: column; } }
"#;

pub const SITE_JS: &str = r#"(function () {
  "use strict";

  var root = document.querySelector("[data-reveal-margin]");
  var margin = root ? root.getAttribute("data-reveal-margin") : "0px";

  function revealNow(el) {
    el.setAttribute("data-reveal", "revealed");
  }

  function startReveal(el) {
    if (el.getAttribute("data-reveal") !== "unseen") return;
    var duration = parseInt(el.getAttribute("data-reveal-duration") || "800", 10);
    var delay = parseInt(el.getAttribute("data-reveal-delay") || "0", 10);
    el.style.setProperty("--reveal-duration", duration + "ms");
    el.style.transitionDelay = delay + "ms";
    el.setAttribute("data-reveal", "revealing");
    window.setTimeout(function () { revealNow(el); }, duration + delay);
  }

  var sections = Array.prototype.slice.call(document.querySelectorAll("[data-reveal]"));
  var reduced = window.matchMedia && window.matchMedia("(prefers-reduced-motion: reduce)").matches;

  if (!("IntersectionObserver" in window) || reduced) {
    sections.forEach(revealNow);
  } else {
    try {
      var observer = new IntersectionObserver(function (entries) {
        entries.forEach(function (entry) {
          if (!entry.isIntersecting) return;
          startReveal(entry.target);
          observer.unobserve(entry.target);
        });
      }, { rootMargin: margin });
      sections.forEach(function (el) {
        if (el.getAttribute("data-reveal") === "unseen") observer.observe(el);
      });
      document.documentElement.classList.add("js-reveal");
    } catch (err) {
      document.documentElement.classList.remove("js-reveal");
      sections.forEach(revealNow);
    }
  }

  function fetchFragment(url) {
    return fetch(url, { headers: { "Accept": "text/html" } }).then(function (res) {
      if (!res.ok) throw new Error("fragment " + url + " returned " + res.status);
      return res.text();
    });
  }

  function selectCategory(section, tab) {
    var category = tab.getAttribute("data-category");
    section.querySelectorAll(".filter-tabs .tab").forEach(function (other) {
      var active = other === tab;
      other.classList.toggle("active", active);
      other.setAttribute("aria-selected", active ? "true" : "false");
    });
    var shown = 0;
    section.querySelectorAll("[data-grid] [data-category]").forEach(function (card) {
      var match = category === "all" || card.getAttribute("data-category") === category;
      card.hidden = !match;
      if (match) shown++;
    });
    var empty = section.querySelector(".empty");
    if (empty) empty.hidden = shown > 0;
  }

  function bindSection(section) {
    section.querySelectorAll(".filter-tabs .tab").forEach(function (tab) {
      tab.addEventListener("click", function () {
        if (tab.classList.contains("active")) return;
        selectCategory(section, tab);
      });
    });
    section.querySelectorAll("button[data-copy]").forEach(function (button) {
      button.addEventListener("click", function () {
        if (!navigator.clipboard) return;
        navigator.clipboard.writeText(button.getAttribute("data-copy")).then(function () {
          button.textContent = "Copied";
          window.setTimeout(function () { button.textContent = "Copy citation"; }, 2000);
        });
      });
    });
    section.querySelectorAll("form[data-newsletter]").forEach(function (form) {
      form.addEventListener("submit", function (event) {
        event.preventDefault();
        var status = form.parentNode.querySelector(".form-status");
        if (status) {
          status.textContent = "Thanks. You are on the list.";
          status.hidden = false;
        }
        form.reset();
      });
    });
    section.querySelectorAll("canvas[data-widget]").forEach(animateWidget);
  }

  function loadDeferred(placeholder) {
    var section = placeholder.closest("section");
    // no timeout: the placeholder stays until the fragment arrives
    fetchFragment(placeholder.getAttribute("data-fragment")).then(function (html) {
      section.innerHTML = html;
      bindSection(section);
    }).catch(function (err) { console.warn(err); });
  }

  function drawOrbit(ctx, w, h, t, widget, pointer) {
    var s = widget.speed * (pointer.active ? 3 : 1);
    var hue = widget.hue + (pointer.hover ? 40 : 0);
    ctx.fillStyle = "hsla(" + hue + ", 80%, 70%, 0.8)";
    for (var i = 0; i < widget.count; i++) {
      var phase = i * 2.39996;
      var r = 1.2 * (0.35 + 0.65 * ((i % 7) / 6));
      var a = phase + t * s;
      var x = w / 2 + (r * Math.cos(a) + pointer.x * 0.2) * w / 3;
      var y = h / 2 + (0.3 * Math.sin(t * 0.5 + phase) + r * Math.sin(a) * 0.4 + pointer.y * 0.2) * h / 3;
      ctx.beginPath();
      ctx.arc(x, y, 1.6, 0, Math.PI * 2);
      ctx.fill();
    }
  }

  function drawBob(ctx, w, h, t, widget, pointer) {
    var distortion = pointer.active ? 0.9 : (pointer.hover ? 0.6 : widget.distortion);
    var tiltX = pointer.x * 0.3;
    var spin = t * widget.speed;
    ctx.strokeStyle = "hsla(" + widget.hue + ", 70%, 75%, 0.9)";
    ctx.fillStyle = "hsla(" + widget.hue + ", 70%, 60%, 0.25)";
    for (var i = 0; i < widget.count; i++) {
      var column = i - (widget.count - 1) / 2;
      var depth = -0.5 * Math.abs(Math.cos(t * 0.3 + i));
      var cx = w / 2 + (column * 0.8 + tiltX) * w / 3;
      var cy = h / 2 + (0.25 * Math.sin(t + i) + pointer.y * 0.3) * h / 3;
      var radius = Math.min(w, h) * 0.12 * (1 + depth * 0.5);
      ctx.beginPath();
      for (var k = 0; k <= 48; k++) {
        var a = (k / 48) * Math.PI * 2 + spin;
        var wobble = 1 + distortion * 0.25 * Math.sin(a * 3 + t * 2 + i);
        var px = cx + Math.cos(a) * radius * wobble;
        var py = cy + Math.sin(a) * radius * wobble;
        if (k === 0) ctx.moveTo(px, py); else ctx.lineTo(px, py);
      }
      ctx.fill();
      ctx.stroke();
    }
  }

  function animateWidget(canvas) {
    var ctx = canvas.getContext && canvas.getContext("2d");
    if (!ctx) return;
    var widget = {
      motion: canvas.getAttribute("data-motion") || "orbit",
      count: parseInt(canvas.getAttribute("data-count") || "0", 10),
      hue: parseFloat(canvas.getAttribute("data-hue") || "0"),
      distortion: parseFloat(canvas.getAttribute("data-distortion") || "0"),
      speed: parseFloat(canvas.getAttribute("data-speed") || "0")
    };
    var draw = widget.motion === "bob" ? drawBob : drawOrbit;
    var pointer = { x: 0, y: 0, hover: false, active: false };
    canvas.addEventListener("pointermove", function (e) {
      var rect = canvas.getBoundingClientRect();
      pointer.x = Math.max(-1, Math.min(1, ((e.clientX - rect.left) / rect.width) * 2 - 1));
      pointer.y = Math.max(-1, Math.min(1, ((e.clientY - rect.top) / rect.height) * 2 - 1));
    });
    canvas.addEventListener("pointerenter", function () { pointer.hover = true; });
    canvas.addEventListener("pointerleave", function () { pointer.hover = false; pointer.active = false; });
    canvas.addEventListener("pointerdown", function () { pointer.active = true; });
    canvas.addEventListener("pointerup", function () { pointer.active = false; });
    var start = performance.now();
    function frame(now) {
      if (!canvas.isConnected) return;
      var w = canvas.width = canvas.clientWidth;
      var h = canvas.height = canvas.clientHeight;
      ctx.clearRect(0, 0, w, h);
      draw(ctx, w, h, (now - start) / 1000, widget, pointer);
      window.requestAnimationFrame(frame);
    }
    window.requestAnimationFrame(frame);
  }

  sections.forEach(bindSection);
  document.querySelectorAll("[data-fragment]").forEach(loadDeferred);
})();
"#;
