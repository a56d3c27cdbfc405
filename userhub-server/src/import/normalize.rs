//! Raw entry -> canonical record

use crate::models::UserRecord;
use crate::source::RawUser;

/// Shape one raw entry into a [`UserRecord`].
///
/// Returns `None` when uuid, name, email, or city ends up empty.
/// The name is `first + " " + last`, trimmed; the other fields are kept verbatim.
pub fn normalize(raw: &RawUser) -> Option<UserRecord> {
    let uuid = raw
        .login
        .as_ref()
        .and_then(|l| l.uuid.as_deref())
        .unwrap_or_default();
    let (first, last) = raw
        .name
        .as_ref()
        .map(|n| (n.first.as_deref().unwrap_or_default(), n.last.as_deref().unwrap_or_default()))
        .unwrap_or_default();
    let name = format!("{} {}", first, last).trim().to_owned();
    let email = raw.email.as_deref().unwrap_or_default();
    let city = raw
        .location
        .as_ref()
        .and_then(|l| l.city.as_deref())
        .unwrap_or_default();

    if uuid.is_empty() || name.is_empty() || email.is_empty() || city.is_empty() {
        return None;
    }

    Some(UserRecord {
        uuid: uuid.to_owned(),
        name,
        email: email.to_owned(),
        city: city.to_owned(),
    })
}
