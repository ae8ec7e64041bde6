/*!

A graph-shaped snapshot of a net, built with no I/O. This is the data a visualisation backend would need to render
the net; rendering itself is an external collaborator, not this crate's job. The optional `dot` feature renders a
snapshot to Graphviz DOT text as the one concrete stand-in this repo provides.

*/

use crate::net::AlgebraicPetriNet;

pub struct PlaceSnapshot {
  pub name: String,
  pub marking: Vec<String>,
}

pub struct ArcSnapshot {
  pub place: String,
  pub label: Vec<String>,
}

pub struct TransitionSnapshot {
  pub name: String,
  pub inbound: Vec<ArcSnapshot>,
  pub outbound: Vec<ArcSnapshot>,
}

pub struct NetSnapshot {
  pub name: String,
  pub places: Vec<PlaceSnapshot>,
  pub transitions: Vec<TransitionSnapshot>,
}

impl AlgebraicPetriNet {
  /// Builds a point-in-time snapshot of this net's static arc structure and current marking, suitable for handing
  /// to an external renderer. Performs no I/O.
  pub fn snapshot(&self) -> NetSnapshot {
    let places = self
      .places()
      .iter()
      .map(|place| PlaceSnapshot {
        name: place.name().to_string(),
        marking: place.marking().iter().map(ToString::to_string).collect(),
      })
      .collect();

    let transitions = self
      .transitions()
      .iter()
      .map(|transition| TransitionSnapshot {
        name: transition.name().to_string(),
        inbound: transition.with_inbound_arcs(|arcs| {
          arcs
            .iter()
            .map(|arc| ArcSnapshot {
              place: arc.place.name().to_string(),
              label: arc.label.iter().map(ToString::to_string).collect(),
            })
            .collect()
        }),
        outbound: transition.with_outbound_arcs(|arcs| {
          arcs
            .iter()
            .map(|arc| ArcSnapshot {
              place: arc.place.name().to_string(),
              label: arc.label.iter().map(ToString::to_string).collect(),
            })
            .collect()
        }),
      })
      .collect();

    NetSnapshot { name: self.name().to_string(), places, transitions }
  }
}

#[cfg(feature = "dot")]
pub mod dot {
  use super::NetSnapshot;
  use std::fmt::Write as _;

  /// Renders a snapshot to a Graphviz DOT string. Places are ovals labelled with their marking, one token per
  /// line; transitions are boxes; arcs are edges labelled with their newline-joined term strings.
  pub fn render(snapshot: &NetSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "digraph \"{}\" {{", snapshot.name);

    for place in &snapshot.places {
      let label = if place.marking.is_empty() { String::new() } else { place.marking.join("\\n") };
      let _ = writeln!(out, "  \"{}\" [shape=oval, label=\"{}\\n{}\"];", place.name, place.name, label);
    }
    for transition in &snapshot.transitions {
      let _ = writeln!(out, "  \"{}\" [shape=box, label=\"{}\"];", transition.name, transition.name);
    }
    for transition in &snapshot.transitions {
      for arc in &transition.inbound {
        let label = arc.label.join("\\n");
        let _ = writeln!(out, "  \"{}\" -> \"{}\" [label=\"{}\"];", arc.place, transition.name, label);
      }
      for arc in &transition.outbound {
        let label = arc.label.join("\\n");
        let _ = writeln!(out, "  \"{}\" -> \"{}\" [label=\"{}\"];", transition.name, arc.place, label);
      }
    }

    out.push_str("}\n");
    out
  }

}
