use maple_route_exchange::Exchange;

/// Create the exchange the next stage will see.
///
/// The snapshot keeps `previous`'s id: redelivery keys off the id, and a
/// snapshot is the same routed exchange one stage further along. Properties
/// are copied into a map of its own. The new input is a copy of
/// `previous`'s output, or of its input when the stage produced no output.
pub fn create_next_exchange(previous: &Exchange) -> Exchange {
    let mut next = Exchange::derived_from(previous);

    next.properties_mut().extend(
        previous
            .properties()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone())),
    );

    let input = match previous.out_message() {
        Some(out) => out.copy(),
        None => previous.in_message().copy(),
    };
    next.set_in(input);
    next
}
