use futures_util::stream::StreamExt;
use lapin::{
    options::{BasicAckOptions, BasicConsumeOptions, QueueDeclareOptions},
    types::FieldTable,
    Channel, Connection, ConnectionProperties,
};
use std::future::Future;
use tokio_amqp::*;

/// Consuming side of the chat: owns one connection and one channel for the
/// lifetime of the process.
#[derive(Debug)]
pub struct ChatReceiver {
    #[allow(dead_code)]
    conn: Connection,
    channel: Channel,
}

impl ChatReceiver {
    pub async fn connect(url: &str) -> Result<Self, lapin::Error> {
        let conn = Connection::connect(url, ConnectionProperties::default().with_tokio()).await?;
        let channel = conn.create_channel().await?;
        log::debug!("receiver connected to {}", url);

        Ok(Self { conn, channel })
    }

    /// Idempotent: creates the queue if absent, no-op if it already exists.
    pub async fn declare_queue(&self, queue: &str) -> Result<&Self, lapin::Error> {
        self.channel
            .queue_declare(queue, QueueDeclareOptions::default(), FieldTable::default())
            .await?;
        log::debug!("declared queue \"{}\"", queue);
        Ok(self)
    }

    /// Consumes the queue until the broker cancels the subscription or the
    /// connection fails. Every delivered body is passed to `handler`, then
    /// acked; the next delivery is not taken before both complete. A
    /// server-side cancellation ends the delivery stream and resolves to
    /// `Ok(())` with nothing handled and nothing acked.
    pub async fn drain<F, Fut>(&self, queue: &str, handler: F) -> Result<(), lapin::Error>
    where
        F: Fn(Vec<u8>) -> Fut,
        Fut: Future<Output = ()>,
    {
        let mut consumer = self
            .channel
            .basic_consume(
                queue,
                "",
                BasicConsumeOptions::default(),
                FieldTable::default(),
            )
            .await?;

        while let Some(delivery) = consumer.next().await {
            let (channel, delivery) = delivery?;
            handler(delivery.data).await;
            channel
                .basic_ack(delivery.delivery_tag, BasicAckOptions::default())
                .await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod connect {
    use super::*;
    use test_utils::URL;

    #[tokio::test]
    async fn returns_receiver_if_connected_successfully() {
        let got = ChatReceiver::connect(URL).await;

        assert!(got.is_ok())
    }

    #[tokio::test]
    async fn errored_if_broker_is_unreachable() {
        let got = ChatReceiver::connect("amqp://127.0.0.1:5673").await;

        assert!(got.is_err())
    }
}
