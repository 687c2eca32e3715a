/// Monotonic id counter owned by a single generator call.
///
/// Ids restart with every new sequence; nothing is persisted between runs.
/// After handing out `i64::MAX` the sequence is exhausted and yields no more ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: Option<i64>,
}

impl IdSequence {
    pub fn new(start: i64) -> Self {
        Self { next: Some(start) }
    }

    /// Id the next call to [`IdSequence::next_id`] will hand out.
    pub fn peek(&self) -> Option<i64> {
        self.next
    }

    pub fn next_id(&mut self) -> Option<i64> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }

    /// Whether `count` more distinct ids can be handed out.
    pub fn has_room_for(&self, count: u64) -> bool {
        let Some(last_offset) = count.checked_sub(1) else {
            return true;
        };
        let Some(next) = self.next else {
            return false;
        };
        i64::try_from(last_offset)
            .ok()
            .and_then(|offset| next.checked_add(offset))
            .is_some()
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new(0)
    }
}
