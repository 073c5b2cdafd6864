#[macro_use]
extern crate log;

use app::*;
use clap::Parser;
use microglass_core::geometry::*;
use microglass_core::interaction::SurfaceInteraction;
use microglass_core::pbrt::*;
use microglass_core::reflection::Albedo;
use microglass_core::sampler::RandomSampler;
use microglass_core::serialization::InstanceManager;
use microglass_materials::*;
use std::convert::TryFrom;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::thread;

mod app;

fn main() {
    // Initialize `env_logger`.
    env_logger::init();

    let options = Options::parse();

    // In case of error report it.
    if let Err(e) = run(&options) {
        error!("{e}");
    }
}

fn run(options: &Options) -> Result<(), String> {
    let tp = options.texture_params()?;
    let material = RoughDielectricBuilder::try_from(&tp)?.configure()?;
    println!("{}", material);

    let albedos = estimate_albedos(&material, options);
    println!("{:>10} {:>12} {:>12} {:>12}", "theta", "reflected", "transmitted", "total");
    for (theta, albedo) in options.angles.iter().zip(albedos.iter()) {
        println!(
            "{:>10.2} {:>12.6} {:>12.6} {:>12.6}",
            theta,
            albedo.reflected.average(),
            albedo.transmitted.average(),
            albedo.total().average()
        );
    }

    if let Some(path) = &options.outfile {
        write_material(&material, path)?;
        info!("Wrote '{}' to '{}'", material.name(), path);
    }

    if options.shader {
        println!("{}", material.create_shader().generate_code("roughdielectric"));
    }

    Ok(())
}

/// Returns the incident direction for an angle in degrees from the normal.
/// Negative angles arrive from inside the interior medium.
///
/// * `theta` - Angle in degrees.
fn incident_direction(theta: Float) -> Vector3f {
    let t = abs(theta).to_radians();
    let w = spherical_direction(t.sin(), t.cos(), 0.0);
    if theta < 0.0 {
        -w
    } else {
        w
    }
}

/// Estimates albedo for each incident angle, one angle per job, spread over
/// worker threads. Results are in the order of `options.angles`.
///
/// * `material` - The material.
/// * `options`  - Command line options.
fn estimate_albedos(material: &RoughDielectric, options: &Options) -> Vec<Albedo> {
    let n_threads = options.threads();
    let mode = options.mode();
    let mut albedos = vec![Albedo::default(); options.angles.len()];

    thread::scope(|scope| {
        let (tx_collector, rx_collector) = crossbeam_channel::unbounded::<(usize, Albedo)>();
        let (tx_worker, rx_worker) = crossbeam_channel::bounded::<usize>(n_threads);

        // Spawn worker threads.
        for _ in 0..n_threads {
            let rx_worker = rx_worker.clone();
            let tx_collector = tx_collector.clone();
            scope.spawn(move || {
                let si = SurfaceInteraction::default();
                for i in rx_worker.iter() {
                    let theta = options.angles[i];
                    let mut sampler = RandomSampler::new(Some(options.seed + i as u64));
                    let wi = incident_direction(theta);
                    debug!("Estimating albedo at {} degrees", theta);

                    let albedo = material.albedo(&si, &wi, mode, options.samples, &mut sampler);
                    if tx_collector.send((i, albedo)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(rx_worker); // Drop extra since we've cloned one for each worker.
        drop(tx_collector);

        // Send work.
        for i in 0..options.angles.len() {
            if tx_worker.send(i).is_err() {
                break;
            }
        }
        drop(tx_worker);

        for (i, albedo) in rx_collector.iter() {
            albedos[i] = albedo;
        }
    });

    albedos
}

/// Writes the serialized material to a file.
///
/// * `material` - The material.
/// * `path`     - Output file path.
fn write_material(material: &RoughDielectric, path: &str) -> Result<(), String> {
    let file = File::create(path).map_err(|e| format!("Unable to create '{}': {}", path, e))?;
    let mut writer = BufWriter::new(file);
    let mut manager = InstanceManager::new();
    material.serialize(&mut writer, &mut manager)?;
    writer.flush().map_err(|e| format!("Unable to write '{}': {}", path, e))
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
