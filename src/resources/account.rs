//! Account resources: profile, ad spaces and balances.

use crate::traits::Fetch;

/// Publisher profile information.
///
/// See <https://developer.zanox.com/web/guest/publisher-api-2011/get-profiles>.
#[derive(Debug, Clone, Copy, Default)]
pub struct Profiles;

impl Fetch for Profiles {
    const PATH: &'static str = "/profiles";
    const FILTERS: &'static [&'static str] = &[];
}

/// Ad spaces registered by the publisher.
///
/// See <https://developer.zanox.com/web/guest/publisher-api-2011/get-adspaces>.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdSpaces;

impl Fetch for AdSpaces {
    const PATH: &'static str = "/adspaces";
    const FILTERS: &'static [&'static str] = &["items", "page"];
}

/// Account balances per currency.
///
/// See <https://developer.zanox.com/web/guest/publisher-api-2011/get-payments-balances>.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountBalances;

impl Fetch for AccountBalances {
    const PATH: &'static str = "/payments/balances";
    const FILTERS: &'static [&'static str] = &["items", "page"];
}
