use env_logger::Env;
use farm_stand::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    farm_stand::start_server(Config::load()).await
}
