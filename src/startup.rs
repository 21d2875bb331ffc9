use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware::Logger, App, HttpServer};

use crate::routes::{default_route, footprint_route};

pub fn run(listener: TcpListener) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(default_route::default)
            .service(footprint_route::fetch_footprint)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
