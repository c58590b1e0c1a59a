//! Route model for the console's screens
//!
//! The platform pages live at `/wallets`, `/wallets/:id` and
//! `/wallets/:id/addresses/:id`; the current route is the only state
//! that survives navigation. Parsing tolerates trailing slashes and
//! strips query/fragment suffixes.

use std::fmt;

/// A navigable location in the console
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Wallet list (home)
    Wallets,
    /// Single wallet: `/wallets/:wallet_id`
    Wallet { wallet_id: String },
    /// Address detail: `/wallets/:wallet_id/addresses/:address_id`
    Address {
        wallet_id: String,
        address_id: String,
    },
}

impl Route {
    /// Canonical path form
    pub fn path(&self) -> String {
        match self {
            Route::Wallets => "/wallets".to_string(),
            Route::Wallet { wallet_id } => format!("/wallets/{}", wallet_id),
            Route::Address {
                wallet_id,
                address_id,
            } => format!("/wallets/{}/addresses/{}", wallet_id, address_id),
        }
    }

    /// Parse a path into a route. Returns `None` for anything outside
    /// the supported set.
    pub fn parse(raw: &str) -> Option<Route> {
        let path = strip_query_frag(raw.trim());
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        match segments.next() {
            Some("wallets") => {}
            _ => return None,
        }

        let wallet_id = match segments.next() {
            None => return Some(Route::Wallets),
            Some(id) => id.to_string(),
        };

        match segments.next() {
            None => Some(Route::Wallet { wallet_id }),
            Some("addresses") => {
                let address_id = segments.next()?.to_string();
                match segments.next() {
                    None => Some(Route::Address {
                        wallet_id,
                        address_id,
                    }),
                    Some(_) => None,
                }
            }
            Some(_) => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn strip_query_frag(s: &str) -> &str {
    match s.find(['?', '#']) {
        Some(i) => &s[..i],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_routes() {
        assert_eq!(Route::parse("/wallets"), Some(Route::Wallets));
        assert_eq!(
            Route::parse("/wallets/w_123"),
            Some(Route::Wallet {
                wallet_id: "w_123".into()
            })
        );
        assert_eq!(
            Route::parse("/wallets/w_123/addresses/a_9"),
            Some(Route::Address {
                wallet_id: "w_123".into(),
                address_id: "a_9".into()
            })
        );
    }

    #[test]
    fn tolerates_trailing_slash_and_query() {
        assert_eq!(Route::parse("/wallets/"), Some(Route::Wallets));
        assert_eq!(
            Route::parse("/wallets/w_1/?tab=balances"),
            Some(Route::Wallet {
                wallet_id: "w_1".into()
            })
        );
    }

    #[test]
    fn rejects_foreign_paths() {
        assert_eq!(Route::parse(""), None);
        assert_eq!(Route::parse("/"), None);
        assert_eq!(Route::parse("/accounts/1"), None);
        assert_eq!(Route::parse("/wallets/w_1/balances"), None);
        assert_eq!(Route::parse("/wallets/w_1/addresses"), None);
        assert_eq!(Route::parse("/wallets/w_1/addresses/a_1/extra"), None);
    }

    #[test]
    fn path_round_trips() {
        let route = Route::Address {
            wallet_id: "w_123".into(),
            address_id: "a_9".into(),
        };
        assert_eq!(Route::parse(&route.path()), Some(route));
    }
}
