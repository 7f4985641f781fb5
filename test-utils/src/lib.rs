use lapin::{
    message::Delivery,
    options::{BasicGetOptions, BasicPublishOptions, QueueDeclareOptions, QueueDeleteOptions},
    types::FieldTable,
    BasicProperties, Channel, Connection, ConnectionProperties,
};
use tokio_amqp::*;
use uuid::Uuid;

pub const URL: &str = "amqp://127.0.0.1:5672";

/// A fresh uniquely-named queue with its own channel, for poking at broker
/// state from outside the code under test.
#[derive(Clone)]
pub struct Queue {
    pub name: String,
    channel: Channel,
}

impl Queue {
    pub async fn new() -> Self {
        let name = Uuid::new_v4().to_string();

        let channel = Connection::connect(URL, ConnectionProperties::default().with_tokio())
            .await
            .unwrap()
            .create_channel()
            .await
            .unwrap();

        channel
            .queue_delete(&name, QueueDeleteOptions::default())
            .await
            .unwrap();
        channel
            .queue_declare(&name, QueueDeclareOptions::default(), FieldTable::default())
            .await
            .unwrap();

        Self { name, channel }
    }

    pub async fn publish(&self, payload: &str) {
        self.channel
            .basic_publish(
                "",
                &self.name,
                BasicPublishOptions::default(),
                payload.as_bytes().to_vec(),
                BasicProperties::default(),
            )
            .await
            .unwrap();
    }

    pub async fn get(&self) -> Option<Delivery> {
        match self
            .channel
            .basic_get(&self.name, BasicGetOptions { no_ack: true })
            .await
            .unwrap()
        {
            Some(m) => Some(m.delivery),
            None => None,
        }
    }

    pub async fn message_count(&self) -> u32 {
        self.channel
            .queue_declare(
                &self.name,
                QueueDeclareOptions {
                    passive: true,
                    ..QueueDeclareOptions::default()
                },
                FieldTable::default(),
            )
            .await
            .unwrap()
            .message_count()
    }

    pub async fn delete(&self) {
        self.channel
            .queue_delete(&self.name, QueueDeleteOptions::default())
            .await
            .unwrap();
    }
}

pub async fn wait_a_moment() {
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;
}
