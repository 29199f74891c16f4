use crate::{Coord, SparseGrid};

/// What a mutating engine call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    Seeded,
    Toggled(Coord),
    Stepped,
    Reset,
    Cleared,
}

/// Passed to every observer after a mutating engine call.
#[derive(Clone, Copy, Debug)]
pub struct Update<'a> {
    pub change: Change,
    pub state: &'a SparseGrid,
    pub generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

type Observer = Box<dyn FnMut(&Update<'_>)>;

/// Registered observers, called in subscription order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: usize,
    entries: Vec<(ObserverId, Observer)>,
}

impl Observers {
    pub fn subscribe(&mut self, observer: Observer) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let len = self.entries.len();
        self.entries.retain(|(i, _)| *i != id);
        self.entries.len() != len
    }

    pub fn notify(&mut self, update: &Update<'_>) {
        for (_, observer) in &mut self.entries {
            observer(update);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
