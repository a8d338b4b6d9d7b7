use std::time::Duration;

use tactus_core::{GestureEvent, GestureKind, TouchOptions};
use tactus_geometry::Point;
use tactus_testing::TouchRobot;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Tactus Touch Demo ===");
    println!("Replays scripted contact streams through the gesture engine and");
    println!("logs what it recognizes. Raw passthrough events log at debug.");
    println!();

    let robot = TouchRobot::new(TouchOptions::default());
    let engine = robot.engine().clone();

    for kind in GestureKind::ALL {
        engine.on(kind, move |event| match event {
            GestureEvent::TouchStart(_) | GestureEvent::TouchMove(_) | GestureEvent::TouchEnd(_) => {
                log::debug!("raw: {:?}", event);
            }
            _ => log::info!("recognized: {:?}", event),
        });
    }

    println!("-- single tap --");
    robot.tap_at(Point::new(40.0, 40.0));
    robot.advance(Duration::from_millis(350));

    println!("-- double tap --");
    robot.double_tap_at(Point::new(40.0, 40.0));
    robot.advance(Duration::from_millis(400));

    println!("-- long press --");
    robot.press_hold(Point::new(80.0, 120.0), Duration::from_millis(700));

    println!("-- swipe right --");
    robot.drag(
        Point::new(20.0, 200.0),
        Point::new(180.0, 210.0),
        Duration::from_millis(120),
    );
    robot.advance(Duration::from_millis(400));

    println!("-- pinch out --");
    robot.pinch(Point::new(160.0, 160.0), 60.0, 100.0);

    println!();
    println!("Done.");
}
