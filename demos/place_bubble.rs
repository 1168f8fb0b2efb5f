use bubble_layout::{PointerDirection, Rect, Scene};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let anchored_top = include_str!("../tests/data/anchored_top.json");
    let corner_anchor = include_str!("../tests/data/corner_anchor.json");
    let scenes = [
        ("anchored_top", anchored_top),
        ("corner_anchor", corner_anchor),
    ];

    for (name, s) in scenes {
        let scene = Scene::from_json(s)?;
        match scene.place() {
            Some(r) => println!(
                "{name}: {:?} (tip faces {:?}) at {} / pointer {:.2}",
                r.direction,
                r.pointer_tip_facing(),
                fmt_rect(r.final_bounds),
                r.pointer_axial_fraction,
            ),
            None => println!("{name}: skipped"),
        }
    }

    // Sweep an anchor across the top edge; the pointer follows it.
    let base = Scene::from_json(scenes[0].1)?;
    for x in [0.0, 200.0, 400.0, 600.0, 760.0] {
        let scene = Scene {
            anchor: Some(Rect::new(x, 0.0, x + 40.0, 40.0)),
            ..base.clone()
        };
        if let Some(r) = scene.place()
            && r.direction != PointerDirection::None
        {
            println!(
                "anchor x={x:>5}: offset {:>7.2} pointer {:.2}",
                r.primary_axis_offset, r.pointer_axial_fraction
            );
        }
    }

    Ok(())
}

fn fmt_rect(r: Rect) -> String {
    format!("({:.1}, {:.1}, {:.1}, {:.1})", r.x0, r.y0, r.x1, r.y1)
}
