use std::net::IpAddr;

/// Interface reported when no candidate has an IPv4 address.
pub const FALLBACK_INTERFACE: &str = "eth0";

/// Pick the first non-loopback interface holding an IPv4 address.
///
/// Candidates are considered in name order so the choice is stable across
/// runs. Falls back to [`FALLBACK_INTERFACE`].
pub fn pick_primary<'a, I, A>(interfaces: I) -> String
where
    I: IntoIterator<Item = (&'a str, A)>,
    A: IntoIterator<Item = IpAddr>,
{
    let mut candidates: Vec<(&str, Vec<IpAddr>)> = interfaces
        .into_iter()
        .map(|(name, addrs)| (name, addrs.into_iter().collect()))
        .collect();
    candidates.sort_by(|a, b| a.0.cmp(b.0));

    candidates
        .into_iter()
        .find(|(name, addrs)| {
            *name != "lo" && addrs.iter().any(|a| a.is_ipv4() && !a.is_loopback())
        })
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| FALLBACK_INTERFACE.to_string())
}

/// First IPv4 address in `addrs`, if any.
pub fn first_ipv4<I: IntoIterator<Item = IpAddr>>(addrs: I) -> Option<IpAddr> {
    addrs.into_iter().find(IpAddr::is_ipv4)
}
