use futures_executor::block_on;
use log::info;
use serde::Serialize;
use std::{cell::RefCell, collections::HashMap};
use verdict::{messages, CapturedError, Outcome, PayloadOutcome, ReasonCode, ResponseBuilder};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Person {
    id: u32,
    first_name: String,
}

#[derive(Debug, Serialize)]
struct Greeting {
    text: String,
}

impl From<Person> for Greeting {
    fn from(person: Person) -> Self {
        Greeting {
            text: format!("Hello, {}!", person.first_name),
        }
    }
}

#[derive(Default)]
struct People {
    rows: RefCell<HashMap<u32, Person>>,
}

impl People {
    async fn insert(&self, person: Person) -> PayloadOutcome<Person> {
        let mut rows = self.rows.borrow_mut();
        if rows.contains_key(&person.id) {
            return PayloadOutcome::from_failure_detailed(
                messages::ALREADY_EXISTS,
                format!("duplicate key value violates unique constraint, id={}", person.id),
                ReasonCode::UniqueConstraintViolation,
                Some(CapturedError::new("people_pkey")),
            );
        }
        rows.insert(person.id, person.clone());
        PayloadOutcome::created(person)
    }

    async fn find(&self, id: u32) -> PayloadOutcome<Person> {
        match self.rows.borrow().get(&id) {
            Some(person) => PayloadOutcome::success(person.clone()),
            None => PayloadOutcome::from_failure(
                messages::does_not_exist(format!("Person {}", id)),
                ReasonCode::NotFound,
            ),
        }
    }

    async fn remove(&self, id: u32) -> Outcome {
        match self.rows.borrow_mut().remove(&id) {
            Some(_) => Outcome::success(),
            None => Outcome::failure_with(messages::does_not_exist(id), ReasonCode::NotFound),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let builder = ResponseBuilder::new();
    let people = People::default();

    block_on(async {
        let ada = Person {
            id: 1,
            first_name: "Ada".into(),
        };

        let created = builder.build_from(|| people.insert(ada.clone())).await;
        info!("insert - {:?}", created);

        let duplicate = builder.build_from(|| people.insert(ada.clone())).await;
        info!("duplicate insert - {:?}", duplicate);

        let directory = &people;
        let greeting = builder
            .build_from(move || async move {
                PayloadOutcome::<Greeting>::derive_from(directory.find(1).await)
            })
            .await;
        info!("greeting - {:?}", greeting);

        let missing = builder.build_from(|| people.find(2)).await;
        info!("find missing - {:?}", missing);

        let removed = builder.build_from_outcome(|| people.remove(1)).await;
        info!("remove - {:?}", removed);
    });

    Ok(())
}
