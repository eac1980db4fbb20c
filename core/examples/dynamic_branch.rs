// defer_branch/examples/dynamic_branch.rs

use defer_branch::defer_branch_dynamic;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();
  info!("--- Dynamic Branch Example ---");

  // Shared reading the predicates look at each time the chain is resolved.
  let temperature = Arc::new(AtomicI32::new(21));
  let (t_cold, t_hot) = (temperature.clone(), temperature.clone());

  let mut thermostat = defer_branch_dynamic::<&'static str, String>();
  thermostat
    .add(move || t_cold.load(Ordering::SeqCst) < 18, |room: &'static str| {
      format!("{room}: heating on")
    })?
    .add(move || t_hot.load(Ordering::SeqCst) > 25, |room: &'static str| {
      format!("{room}: cooling on")
    })?
    .fallback(|room: &'static str| warn!(room, "Temperature in range, nothing to do."))?;

  for reading in [12, 21, 30] {
    temperature.store(reading, Ordering::SeqCst);
    thermostat.resolve("kitchen");
    let action = thermostat.run("kitchen");
    info!(reading, ?action, "Thermostat resolved.");
  }

  // The last resolve saw 30 degrees.
  assert_eq!(thermostat.run("hall"), Some("hall: cooling on".to_string()));
  Ok(())
}
