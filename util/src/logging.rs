use itertools::Itertools;
pub use log::{debug, error, info, trace, warn};

pub fn init_logging() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|formatcallback, fmtarguments_msg, logrecord| {
            formatcallback.finish(format_args!(
                "[{} {}({:?}) {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                logrecord.target(),
                std::thread::current().id(),
                logrecord.level(),
                fmtarguments_msg,
            ))
        })
        .level(if_dbg_else!({log::LevelFilter::Trace}{log::LevelFilter::Info}))
        .chain(fern::log_file("openjass.log")?)
        .apply()?;
    let fn_panic_handler_original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panicinfo| {
        error!("panic: {}", panicinfo);
        fn_panic_handler_original(panicinfo)
    }));
    info!("Started: {}", std::env::args()
        .format_with(
            /*sep*/" ",
            |str_arg, formatter| {
                formatter(&format_args!("\"{}\"", str_arg))
            },
        )
    );
    Ok(())
}
