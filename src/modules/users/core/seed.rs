use crate::modules::users::core::user::User;

pub fn directory_seed() -> Vec<User> {
    vec![
        User::new(1, "John Doe", Some("john@example.com".into())),
        User::new(2, "Jane Smith", Some("jane@example.com".into())),
    ]
}

pub fn roster_seed() -> Vec<User> {
    vec![
        User::new(1, "Alice", None),
        User::new(2, "Bob", None),
        User::new(3, "Charlie", None),
    ]
}
