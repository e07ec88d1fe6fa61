//! Box plot renderer:
//! - one shared vertical scale across all boxes
//! - commands emitted left to right in input order, `cl` last
//! - buffered writes, flushed once at the end

use std::io::{BufWriter, Write};

use crate::{
    core::{
        bounds::{LinearMap, value_bounds},
        config::Config,
        constants::LABEL_SIG_DIGITS,
        data::Dataset,
        error::PlotError,
    },
    render::{
        command::{Align, Command},
        label::format_sig,
        layout::{Columns, Slot},
    },
};

// --- Helpers ---

fn text(out: &mut Vec<Command>, x: f64, y: f64, align: Align, text: String) {
    out.push(Command::Move { x, y });
    out.push(Command::Text { align, text });
}

fn value_label(out: &mut Vec<Command>, x: f64, y: f64, v: f64) {
    text(out, x, y, Align::Right, format_sig(v, LABEL_SIG_DIGITS));
}

/// Whisker from the box edge at `edge` out to `end`, capped, labelled with `v`.
fn whisker(out: &mut Vec<Command>, slot: &Slot, cap: f64, edge: f64, end: f64, v: f64) {
    out.push(Command::Line {
        x0: slot.center - cap,
        y0: end,
        x1: slot.center + cap,
        y1: end,
    });
    out.push(Command::Line {
        x0: slot.center,
        y0: edge,
        x1: slot.center,
        y1: end,
    });
    value_label(out, slot.center - cap, end, v);
}

fn draw_box(
    out: &mut Vec<Command>,
    b: &Dataset,
    slot: &Slot,
    cap: f64,
    y_name: f64,
    tr: &LinearMap,
) {
    let s = &b.summary;
    text(out, slot.center, y_name, Align::Center, b.name.clone());

    let (bottom, top) = (tr.apply(s.q1), tr.apply(s.q3));
    out.push(Command::Box {
        x0: slot.left,
        y0: bottom,
        x1: slot.right,
        y1: top,
    });
    value_label(out, slot.left, bottom, s.q1);
    value_label(out, slot.left, top, s.q3);

    let med = tr.apply(s.median);
    out.push(Command::Line {
        x0: slot.left,
        y0: med,
        x1: slot.right,
        y1: med,
    });
    value_label(out, slot.left, med, s.median);

    whisker(out, slot, cap, bottom, tr.apply(s.min), s.min);
    whisker(out, slot, cap, top, tr.apply(s.max), s.max);
}

/// Every command needed to draw `boxes`, in output order.
///
/// With no boxes only the title (if any) and `cl` are produced.
#[must_use]
pub fn draw_commands(cfg: &Config, boxes: &[Dataset]) -> Vec<Command> {
    // name, box, 3 labels, median, 2 × (cap, stem, label)
    let mut out = Vec::with_capacity(3 + boxes.len() * 18);

    if cfg.has_title() {
        text(&mut out, 0.5, 1.0 - cfg.y_text, Align::Center, cfg.title.clone());
    }

    if let Some(cols) = Columns::new(boxes.len()) {
        let tr = LinearMap::new(value_bounds(boxes), (cfg.plot_bottom(), cfg.plot_top()));
        for (b, slot) in boxes.iter().zip(cols.slots()) {
            draw_box(&mut out, b, &slot, cols.cap, cfg.y_text, &tr);
        }
    }

    out.push(Command::Clear);
    out
}

/// Writes box plots as `plot(1)` commands.
pub struct Renderer<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> Renderer<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
        }
    }

    /// Main render entry.
    pub fn render(&mut self, config: &Config, boxes: &[Dataset]) -> Result<(), PlotError> {
        for cmd in draw_commands(config, boxes) {
            writeln!(self.out, "{cmd}")?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Hand back the sink, flushing anything still buffered.
    pub fn into_inner(self) -> Result<W, PlotError> {
        self.out.into_inner().map_err(|e| PlotError::Io(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::read_boxes;

    fn boxes(input: &str) -> Vec<Dataset> {
        read_boxes(input.as_bytes()).unwrap()
    }

    fn render(cfg: &Config, boxes: &[Dataset]) -> String {
        let mut r = Renderer::new(Vec::new());
        r.render(cfg, boxes).unwrap();
        String::from_utf8(r.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn nothing_to_draw() {
        assert_eq!(render(&Config::default(), &[]), "cl\n");
    }

    #[test]
    fn title_only() {
        let cfg = Config::builder().title("T").build().unwrap();
        assert_eq!(render(&cfg, &[]), "m 0.500000 0.980000\nt \"\\CT\"\ncl\n");
    }

    #[test]
    fn single_box_layout() {
        let out = render(&Config::default(), &boxes("a 1 2 3 4 5 6"));
        let expected = "\
m 0.500000 0.020000
t \"\\Ca\"
bo 0.333333 0.246000 0.666667 0.774000
m 0.333333 0.246000
t \"\\R2\"
m 0.333333 0.774000
t \"\\R5\"
li 0.333333 0.510000 0.666667 0.510000
m 0.333333 0.510000
t \"\\R3.5\"
li 0.416667 0.070000 0.583333 0.070000
li 0.500000 0.246000 0.500000 0.070000
m 0.416667 0.070000
t \"\\R1\"
li 0.416667 0.950000 0.583333 0.950000
li 0.500000 0.774000 0.500000 0.950000
m 0.416667 0.950000
t \"\\R6\"
cl
";
        assert_eq!(out, expected);
    }

    #[test]
    fn command_count_per_box() {
        let cmds = draw_commands(&Config::default(), &boxes("a 1 2 b 3 4 c 5"));
        assert_eq!(cmds.len(), 3 * 18 + 1);
        assert_eq!(cmds.last(), Some(&Command::Clear));
    }

    #[test]
    fn boxes_share_one_scale() {
        let cmds = draw_commands(&Config::default(), &boxes("lo 0 1 hi 9 10"));
        let boxes: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                Command::Box { y0, y1, .. } => Some((*y0, *y1)),
                _ => None,
            })
            .collect();
        assert_eq!(boxes.len(), 2);
        assert!(boxes[0].1 < boxes[1].0);
        assert!((boxes[0].0 - 0.07).abs() < 1e-12);
        assert!((boxes[1].1 - 0.95).abs() < 1e-12);
    }

    #[test]
    fn tiny_spread_still_fills_the_plot() {
        let cmds = draw_commands(&Config::default(), &boxes("a 1e-17 2e-17 3e-17"));
        let Some(&Command::Box { y0, y1, .. }) =
            cmds.iter().find(|c| matches!(c, Command::Box { .. }))
        else {
            panic!("no box drawn");
        };
        assert!((y0 - 0.07).abs() < 1e-12);
        assert!(y1 - y0 > 0.5, "box collapsed: {y0} .. {y1}");
        let ys: Vec<f64> = cmds
            .iter()
            .filter_map(|c| match c {
                Command::Line { y1, .. } => Some(*y1),
                _ => None,
            })
            .collect();
        assert!(ys.iter().any(|y| (y - 0.95).abs() < 1e-12));
    }

    #[test]
    fn empty_and_flat_boxes_stay_finite() {
        for input in ["a", "a b", "a 3 3 3", "a 5 b"] {
            for cmd in draw_commands(&Config::default(), &boxes(input)) {
                let coords = match cmd {
                    Command::Move { x, y } => vec![x, y],
                    Command::Box { x0, y0, x1, y1 } | Command::Line { x0, y0, x1, y1 } => {
                        vec![x0, y0, x1, y1]
                    }
                    _ => vec![],
                };
                assert!(coords.iter().all(|v| v.is_finite()), "{input}: {cmd}");
            }
        }
    }

    #[test]
    fn title_lowers_the_plot() {
        let cfg = Config::builder().title("T").build().unwrap();
        let cmds = draw_commands(&cfg, &boxes("a 0 1"));
        let top = cmds
            .iter()
            .filter_map(|c| match c {
                Command::Line { y1, .. } => Some(*y1),
                _ => None,
            })
            .fold(f64::NEG_INFINITY, f64::max);
        assert!((top - 0.93).abs() < 1e-12);
    }

    #[test]
    fn deterministic() {
        let input = "linear 1 2 3 4 5 6 exponential 2 4 8 16 32 64";
        let cfg = Config::builder().title("Title").build().unwrap();
        assert_eq!(render(&cfg, &boxes(input)), render(&cfg, &boxes(input)));
    }
}
