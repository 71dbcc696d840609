// ABOUTME: Home directory resolution for '~' manifest paths on Linux.
// ABOUTME: Prefers the sudo caller over root and looks homes up in the password database.

use std::path::Path;

const PASSWD: &str = "/etc/passwd";

/// The home directory `~` expands to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeDir(String);

impl HomeDir {
    /// Resolve from `USER`, or `SUDO_USER` when running as root.
    ///
    /// Returns `None` when no user name is available.
    pub fn from_env() -> Option<Self> {
        let user = invoking_user(
            std::env::var("USER").ok(),
            std::env::var("SUDO_USER").ok(),
        )?;
        Some(Self::for_user_in(&user, Path::new(PASSWD)))
    }

    /// `/home/<user>`, without consulting the password database.
    pub fn for_user(user: &str) -> Self {
        Self(format!("/home/{user}"))
    }

    /// Look `user` up in a passwd-format file, falling back to `/home/<user>`.
    pub fn for_user_in(user: &str, passwd: &Path) -> Self {
        std::fs::read_to_string(passwd)
            .ok()
            .and_then(|db| passwd_home(&db, user))
            .map(Self)
            .unwrap_or_else(|| Self::for_user(user))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replace a leading `~` (alone or followed by `/`) with this directory.
    ///
    /// Paths without a leading `~` are returned as-is. `~user` forms name
    /// another user's home and yield `None`.
    pub fn expand(&self, path: &str) -> Option<String> {
        match path.strip_prefix('~') {
            None => Some(path.to_string()),
            Some(rest) if rest.is_empty() || rest.starts_with('/') => {
                Some(format!("{}{}", self.0.trim_end_matches('/'), rest))
            }
            Some(_) => None,
        }
    }
}

fn invoking_user(user: Option<String>, sudo_user: Option<String>) -> Option<String> {
    let user = user.filter(|u| !u.is_empty());
    let sudo_user = sudo_user.filter(|u| !u.is_empty());
    if user.as_deref() == Some("root") {
        sudo_user.or(user)
    } else {
        user.or(sudo_user)
    }
}

fn passwd_home(db: &str, user: &str) -> Option<String> {
    db.lines()
        .filter(|l| !l.starts_with('#'))
        .map(|l| l.split(':').collect::<Vec<_>>())
        .find(|fields| fields.len() >= 6 && fields[0] == user)
        .map(|fields| fields[5].to_string())
        .filter(|home| !home.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_leading_tilde() {
        let home = HomeDir::for_user("alice");
        assert_eq!(
            home.expand("~/.steam/steam/steamxr_linux64.json").as_deref(),
            Some("/home/alice/.steam/steam/steamxr_linux64.json")
        );
        assert_eq!(home.expand("~").as_deref(), Some("/home/alice"));
    }

    #[test]
    fn other_users_home_is_not_expanded() {
        let home = HomeDir::for_user("alice");
        assert_eq!(home.expand("~bob/.steam/steamxr_linux64.json"), None);
    }

    #[test]
    fn leaves_other_paths_alone() {
        let home = HomeDir::for_user("alice");
        assert_eq!(
            home.expand("/usr/share/x.json").as_deref(),
            Some("/usr/share/x.json")
        );
        assert_eq!(home.expand("/opt/~/x.json").as_deref(), Some("/opt/~/x.json"));
    }

    #[test]
    fn root_defers_to_sudo_user() {
        assert_eq!(
            invoking_user(Some("root".into()), Some("bob".into())),
            Some("bob".into())
        );
        assert_eq!(invoking_user(Some("root".into()), None), Some("root".into()));
        assert_eq!(
            invoking_user(Some("alice".into()), Some("bob".into())),
            Some("alice".into())
        );
        assert_eq!(invoking_user(None, None), None);
    }

    #[test]
    fn passwd_lookup_finds_home_field() {
        let db = "# comment\nroot:x:0:0:root:/root:/bin/bash\nbob:x:1000:1000:Bob:/srv/bob:/bin/sh\n";
        assert_eq!(passwd_home(db, "root"), Some("/root".into()));
        assert_eq!(passwd_home(db, "bob"), Some("/srv/bob".into()));
        assert_eq!(passwd_home(db, "carol"), None);
    }

    #[test]
    fn for_user_in_falls_back_when_unlisted() {
        let dir = tempfile::tempdir().unwrap();
        let passwd = dir.path().join("passwd");
        std::fs::write(&passwd, "root:x:0:0:root:/root:/bin/bash\n").unwrap();

        assert_eq!(HomeDir::for_user_in("root", &passwd).as_str(), "/root");
        assert_eq!(HomeDir::for_user_in("dave", &passwd).as_str(), "/home/dave");
        assert_eq!(
            HomeDir::for_user_in("dave", &dir.path().join("missing")).as_str(),
            "/home/dave"
        );
    }
}
