//! ladspa-rdf-inspect - print the cached LADSPA-RDF catalog
//!
//! Usage: `ladspa-rdf-inspect [PATH] [CLASS]`
//!
//! Without PATH (or with `-`) the default cache location is used (see
//! `ladspa_rdf::plugin::cache::cache_path`). CLASS limits the output to one
//! category, given as an RDF class name (`FilterPlugin`) or a plain word
//! (`reverb`).

use std::path::PathBuf;

use ladspa_rdf::plugin::cache;
use ladspa_rdf::{DescriptorCatalog, PluginCategory, PluginInfo, RdfDescriptor};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args_os().skip(1);

    let path = match args.next() {
        Some(p) if p != "-" => PathBuf::from(p),
        _ => cache::cache_path(),
    };
    let filter = args
        .next()
        .map(|c| PluginCategory::from_class_label(&c.to_string_lossy()));

    log::info!("Reading RDF cache {}", path.display());

    let mut catalog: DescriptorCatalog = match cache::load_cache(&path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to read {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };
    catalog.sort_catalog();

    let mut shown = 0usize;
    for desc in catalog.descriptors() {
        let info = PluginInfo::from_rdf(desc);
        if let Some(category) = &filter
            && info.category != *category
        {
            continue;
        }
        print_descriptor(desc, &info);
        shown += 1;
    }

    match &filter {
        Some(category) => log::info!(
            "{} of {} descriptors in category {}",
            shown,
            catalog.len(),
            category
        ),
        None => log::info!("{} descriptors", catalog.len()),
    }
}

fn print_descriptor(desc: &RdfDescriptor, info: &PluginInfo) {
    println!("{} [{}]", info.name, info.unique_id);
    if let Some(author) = &info.author {
        println!("  creator:  {}", author);
    }
    println!("  category: {}", info.category);
    let classes = desc.class_labels();
    if !classes.is_empty() {
        println!("  classes:  {}", classes.join(", "));
    }
    println!(
        "  ports:    {} audio in, {} audio out, {} control in, {} control out",
        info.audio_inputs, info.audio_outputs, info.control_inputs, info.control_outputs
    );

    for port in &info.ports {
        let kind = if port.port_type.is_control() { "control" } else { "audio" };
        let direction = if port.port_type.is_output() { "out" } else { "in" };
        let mut line = format!("    {:>3} {:<7} {:<3} {}", port.index, kind, direction, port.name);
        if let Some(default) = port.default_value {
            line.push_str(&format!(" = {}", default));
        }
        if let Some(unit) = &port.unit {
            line.push_str(&format!(" {}", unit));
        }
        println!("{}", line);
        for sp in &port.scale_points {
            println!(
                "          {} => {}",
                sp.value,
                sp.label.as_deref().unwrap_or("")
            );
        }
    }
}
