//! A `User` type whose fields are declared once and shared by every instance.

use fieldguard::config::ExclusionList;
use fieldguard::core::{Field, FieldDecl};
use fieldguard::rules::{in_range, non_empty};
use fieldguard::RuleViolation;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock};

struct UserFields {
    age: Arc<FieldDecl<u32>>,
    name: Arc<FieldDecl<String>>,
}

impl UserFields {
    fn new(blacklist: ExclusionList<String>) -> Self {
        Self {
            age: FieldDecl::builder("User", "age")
                .attach(in_range(18..=60, "Value is out of range 18~60"))
                .build()
                .unwrap(),
            name: FieldDecl::builder("User", "name")
                .attach(non_empty("Value is must not be empty"))
                .attach(blacklist.rule("This user is included in blacklist"))
                .build()
                .unwrap(),
        }
    }
}

static USER_FIELDS: LazyLock<UserFields> = LazyLock::new(|| {
    let blacklist = ExclusionList::from_json(r#"{ "entries": ["佐藤", "優美清春香菜"] }"#).unwrap();
    UserFields::new(blacklist)
});

struct User {
    age: Field<u32>,
    name: Field<String>,
}

impl User {
    fn new(age: u32, name: &str) -> Result<Self, RuleViolation> {
        Ok(Self {
            age: Field::new(Arc::clone(&USER_FIELDS.age), age)?,
            name: Field::new(Arc::clone(&USER_FIELDS.name), name.to_string())?,
        })
    }
}

#[test]
fn age_accepts_value_in_range() {
    let mut user = User::new(18, "田中").unwrap();

    user.age.set(30).unwrap();
    assert_eq!(*user.age, 30);
}

#[test]
fn age_rejects_value_out_of_range() {
    let mut user = User::new(18, "田中").unwrap();

    let err = user.age.set(5).unwrap_err();
    assert_eq!(
        err.to_string(),
        "(in property of User.age) Value is out of range 18~60: 5"
    );
    assert_eq!(*user.age, 18);
}

#[test]
fn empty_name_reports_first_declared_rule() {
    let mut user = User::new(18, "田中").unwrap();

    let err = user.name.set(String::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "(in property of User.name) Value is must not be empty: \"\""
    );
}

#[test]
fn blacklisted_name_reports_blacklist_rule() {
    let mut user = User::new(18, "田中").unwrap();

    let err = user.name.set("佐藤".to_string()).unwrap_err();
    assert_eq!(err.description(), "This user is included in blacklist");
    assert_eq!(err.value(), "\"佐藤\"");
    assert_eq!(user.name.get(), "田中");
}

#[test]
fn accepted_name_reads_back() {
    let mut user = User::new(20, "鈴木").unwrap();

    user.name.set("田中".to_string()).unwrap();
    assert_eq!(user.name.get(), "田中");
}

#[test]
fn constructor_rejects_invalid_initial_values() {
    let err = User::new(18, "優美清春香菜").err().unwrap();
    assert_eq!(err.field_name(), "name");

    let err = User::new(61, "田中").err().unwrap();
    assert_eq!(err.field_name(), "age");
}

#[test]
fn users_keep_separate_values() {
    let mut first = User::new(20, "田中").unwrap();
    let second = User::new(40, "鈴木").unwrap();

    first.age.set(25).unwrap();
    assert_eq!(*first.age, 25);
    assert_eq!(*second.age, 40);
    assert_eq!(second.name.get(), "鈴木");
}

#[test]
fn rules_run_before_custom_writer() {
    let trims = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&trims);
    let seen_by_rule = Arc::new(std::sync::Mutex::new(Vec::new()));
    let log = Arc::clone(&seen_by_rule);

    let decl = FieldDecl::builder("Account", "handle")
        .writer(move |raw: String| {
            counter.fetch_add(1, Ordering::SeqCst);
            raw.trim().to_string()
        })
        .rule(
            move |raw: &String| {
                log.lock().unwrap().push(raw.clone());
                !raw.is_empty()
            },
            "Value is must not be empty",
        )
        .build()
        .unwrap();

    let mut handle = Field::new(decl, " tanaka ".to_string()).unwrap();
    assert_eq!(handle.get(), "tanaka");
    assert_eq!(trims.load(Ordering::SeqCst), 1);
    assert_eq!(seen_by_rule.lock().unwrap().as_slice(), [" tanaka ".to_string()]);

    assert!(handle.set(String::new()).is_err());
    assert_eq!(trims.load(Ordering::SeqCst), 1);
    assert_eq!(handle.get(), "tanaka");
}
