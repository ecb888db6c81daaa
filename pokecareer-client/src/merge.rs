use pokecareer_data::CareerState;

/// Reconciles an authoritative server state with the prior client state.
///
/// The server wins for every field except the two the client speculates on:
///
/// - `move_hints` take the per-key maximum over the union of keys, so a
///   locally recorded hint is never erased by a response that has not caught
///   up, and a count the server has confirmed never shrinks.
/// - `learnable_abilities` keep every move the client already surfaced until
///   the server confirms it as known. Hinted moves stay visible too;
///   omission from both the learnable and known sets is treated as "not yet
///   observed", not as a rejection.
///
/// If either input is absent, the other is returned unchanged. The function
/// is pure and idempotent: `merge(s, merge(s, c)) == merge(s, c)`.
pub fn merge_career_state(
    server: Option<CareerState>,
    prior: Option<CareerState>,
) -> Option<CareerState> {
    let (server, prior) = match (server, prior) {
        (Some(server), Some(prior)) => (server, prior),
        (server, prior) => return server.or(prior),
    };
    let mut merged = server;

    for (name, count) in prior.move_hints {
        let entry = merged.move_hints.entry(name).or_default();
        *entry = (*entry).max(count);
    }

    for name in prior.pokemon.learnable_abilities {
        if !merged.known_abilities.contains(&name) {
            merged.pokemon.learnable_abilities.insert(name);
        }
    }

    // Every hinted move stays visible until the server reports it as known.
    // Iterating the merged hints (rather than the prior's alone) is what
    // keeps the merge idempotent.
    for name in merged.move_hints.keys() {
        if !merged.known_abilities.contains(name)
            && !merged.pokemon.learnable_abilities.contains(name)
        {
            merged.pokemon.learnable_abilities.insert(name.clone());
        }
    }

    Some(merged)
}
