// defer_branch/examples/static_branch.rs

use defer_branch::defer_branch;
use tracing::info;

#[derive(Clone, Debug)]
struct Shipment {
  weight_kg: u32,
  destination: String,
  express: bool,
}

fn quote(shipment: &Shipment) -> anyhow::Result<Option<String>> {
  let mut branch = defer_branch::<Shipment, String>();
  branch
    .add(shipment.express && shipment.weight_kg <= 5, |s: Shipment| {
      format!("express parcel to {}", s.destination)
    })?
    .add(shipment.weight_kg > 30, |s: Shipment| format!("freight ({} kg) to {}", s.weight_kg, s.destination))?
    .add(shipment.weight_kg > 5, |s: Shipment| format!("standard box to {}", s.destination))?
    // Fires right now if none of the above matched.
    .fallback(|| info!("Nothing matched while building the chain."))?
    .deferred_fallback(|s: Shipment| format!("letter to {}", s.destination))?;

  Ok(branch.run(shipment.clone()))
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();
  info!("--- Static Branch Example ---");

  let shipments = [
    Shipment { weight_kg: 2, destination: "Lyon".to_string(), express: true },
    Shipment { weight_kg: 40, destination: "Gdansk".to_string(), express: true },
    Shipment { weight_kg: 12, destination: "Porto".to_string(), express: false },
    Shipment { weight_kg: 1, destination: "Oslo".to_string(), express: false },
  ];

  for shipment in &shipments {
    let outcome = quote(shipment)?;
    info!(?shipment, ?outcome, "Quoted shipment.");
  }

  assert_eq!(quote(&shipments[1])?, Some("freight (40 kg) to Gdansk".to_string()));
  assert_eq!(quote(&shipments[3])?, Some("letter to Oslo".to_string()));
  Ok(())
}
