use maple_route_exchange::{Exchange, ExchangePattern};

/// Copy the result of the final working exchange onto the caller's exchange.
///
/// Failure and rollback state are taken over as-is (a cleared failure clears
/// the result's). A reply is copied when the source has one; otherwise the
/// source's last input stands in for it, as the final stage may not have
/// produced any output. Properties are merged: source values overwrite the
/// result's, and keys only the result holds are kept.
pub fn copy_results(result: &mut Exchange, mut source: Exchange) {
    match source.take_failure() {
        Some(failure) => result.set_failure(failure),
        None => result.clear_failure(),
    }
    result.set_rollback_only(source.is_rollback_only());

    if let Some(out) = source.take_out() {
        result.set_out(out);
    } else if result.pattern() == ExchangePattern::InOptionalOut {
        result.clear_out();
    } else if result.pattern().is_out_capable() {
        result.set_out(source.in_message().copy());
    } else {
        result.set_in(source.in_message().copy());
        result.clear_out();
    }

    result.properties_mut().extend(source.properties_mut().drain());
}
