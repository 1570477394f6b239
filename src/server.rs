use std::io;

use actix_web::{
    dev::{Server as HttpServerHandle, ServerHandle},
    middleware::Logger,
    web, App, HttpServer,
};
use tokio::sync::mpsc;

use crate::{config::Config, event::Event, hooks, http::WebhookConfig, queue::Queue};

/// The webhook receiver: route table, delivery queue producer and settings.
#[derive(Debug, Clone)]
pub struct Server {
    config: Config,
    queue: Queue,
}

impl Server {
    /// Builds the receiver and returns the reading end of its delivery queue.
    pub fn new(config: Config) -> (Self, mpsc::Receiver<Event>) {
        let (queue, events) = Queue::bounded(config.queue_capacity, config.enqueue_timeout());
        (Self { config, queue }, events)
    }

    /// Registers the receiver's routes.
    ///
    /// A GET on the ping path is answered before anything else, so the ping
    /// path may equal the webhook path. Other paths get 404, and methods
    /// other than POST on the webhook path get 405.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        let Config {
            path,
            ping_path,
            secret,
            max_body_size,
            accept_unknown,
            ..
        } = &self.config;

        cfg.app_data(web::Data::new(self.queue.clone()))
            .app_data(WebhookConfig {
                secret: secret.clone(),
                accept_unknown: *accept_unknown,
            })
            .app_data(web::PayloadConfig::new(*max_body_size));

        let mut webhook = web::resource(path.as_str());
        if ping_path == path {
            webhook = webhook.route(web::get().to(hooks::ping));
        } else {
            cfg.service(
                web::resource(ping_path.as_str())
                    .route(web::get().to(hooks::ping))
                    .default_service(web::to(hooks::not_found)),
            );
        }
        cfg.service(
            webhook
                .route(web::post().to(hooks::receive))
                .default_service(web::to(hooks::method_not_allowed)),
        )
        .default_service(web::to(hooks::not_found));
    }

    /// Binds the configured address and returns the server future.
    pub fn listen(self) -> io::Result<HttpServerHandle> {
        let (host, port) = self.config.bind_address();
        let addr = (host.to_owned(), port);
        tracing::info!(
            "listening for webhooks on {}:{}{}",
            addr.0,
            addr.1,
            self.config.path
        );

        let server = HttpServer::new(move || {
            App::new()
                .configure(|cfg| self.configure(cfg))
                .wrap(Logger::default())
        })
        .bind(addr)?
        .run();
        Ok(server)
    }

    /// Binds and runs the server in the background on the current actix runtime.
    pub fn spawn(self) -> io::Result<ServerHandle> {
        let server = self.listen()?;
        let handle = server.handle();
        actix_web::rt::spawn(async move {
            if let Err(err) = server.await {
                tracing::error!("webhook server stopped: {}", err);
            }
        });
        Ok(handle)
    }
}
