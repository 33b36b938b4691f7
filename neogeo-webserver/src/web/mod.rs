use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;
mod sqlite;


#[derive(Debug, Clone, Default)]
pub struct Cfg {
    /// Scheme and authority of absolute resource URLs,
    /// e.g. `https://example.com`.
    ///
    /// Derived from the `Host` header of each request if missing.
    pub public_base_url: Option<String>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;

    match &cfg.public_base_url {
        Some(url) => info!("Public base URL: {url}"),
        None => info!("Public base URL: derived from requests"),
    }

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(db).manage(cfg);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes())]
}

pub async fn run(db: sqlite::Connections, enable_cors: bool, cfg: Cfg) -> anyhow::Result<()> {
    let mounts = mounts();
    let options = InstanceOptions {
        mounts,
        rocket_cfg: None,
        cfg,
    };

    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        info!("Enabling CORS");
        let cors = rocket_cors::CorsOptions::default()
            .to_cors()
            .map_err(|err| anyhow::anyhow!("Invalid CORS options: {err}"))?;
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        anyhow::bail!("Unable to run web server: {err}");
    }
    Ok(())
}
