use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    ctx.render(presenters::present_class_list())
}
