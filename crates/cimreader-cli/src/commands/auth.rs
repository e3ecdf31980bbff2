use anyhow::Result;
use cimreader_core::Session;

use crate::context::AppContext;
use crate::AuthAction;

pub fn run(ctx: &AppContext, action: AuthAction) -> Result<()> {
    match action {
        AuthAction::Login { token, email } => {
            let session = Session::new(token, email);
            ctx.store.save(&session)?;
            ctx.sessions.replace(Some(session.clone()));
            println!("Signed in as {}", session.display_name());
        }
        AuthAction::Status => match ctx.sessions.current() {
            Some(session) => println!("Signed in as {}", session.display_name()),
            None => println!("Not signed in"),
        },
        AuthAction::Logout => {
            ctx.store.clear()?;
            ctx.sessions.sign_out();
            println!("Signed out");
        }
    }
    Ok(())
}
