use crate::project::Project;

pub fn run() -> Result<(), String> {
    let project = Project::locate_from_cwd()?;
    println!("{}", project.primary().display());
    Ok(())
}
